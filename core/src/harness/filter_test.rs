#[cfg(test)]
mod tests {
    use crate::harness::Filter;
    use anyhow::Result;

    #[test]
    fn test_filter_top_level_is_unanchored() -> Result<()> {
        let filter = Filter::parse("TestHelloWorld")?;
        assert!(filter.matches(&["TestHelloWorld"]));
        assert!(filter.matches(&["TestHelloWorldSecond"]));
        assert!(filter.matches(&["TestHelloWorldTable", "Nur"]));
        assert!(!filter.matches(&["TestSkip"]));
        Ok(())
    }

    #[test]
    fn test_filter_anchored_element() -> Result<()> {
        let filter = Filter::parse("^TestHelloWorld$")?;
        assert!(filter.matches(&["TestHelloWorld"]));
        assert!(!filter.matches(&["TestHelloWorldSecond"]));
        Ok(())
    }

    #[test]
    fn test_filter_sub_case_path() -> Result<()> {
        let filter = Filter::parse("TestSubTest/Didik")?;
        // The parent has to be selected so its children can be visited
        assert!(filter.matches(&["TestSubTest"]));
        assert!(filter.matches(&["TestSubTest", "Didik"]));
        assert!(!filter.matches(&["TestSubTest", "Hidayat"]));
        assert!(!filter.matches(&["TestSkip"]));
        assert_eq!(filter.pattern(), "TestSubTest/Didik");
        Ok(())
    }

    #[test]
    fn test_filter_empty_element_matches_everything() -> Result<()> {
        let filter = Filter::parse("/Nur")?;
        assert!(filter.matches(&["TestHelloWorldTable", "Nur"]));
        assert!(filter.matches(&["AnythingElse", "Nur"]));
        assert!(!filter.matches(&["TestHelloWorldTable", "Anies"]));
        Ok(())
    }

    #[test]
    fn test_filter_rejects_invalid_regex() {
        let err = Filter::parse("Test(").unwrap_err();
        assert!(err.to_string().contains("invalid -run element"));
    }
}
