use anyhow::{Context, Result};
use regex::Regex;

/// Case selector in the style of `go test -run`.
///
/// The pattern is split on `/`. Element `i` is an unanchored regular
/// expression matched against the case name at depth `i`. Paths that are
/// deeper than the pattern are matched by their first levels only.
#[derive(Debug, Clone)]
pub struct Filter {
    pattern: String,
    levels: Vec<Regex>,
}

impl Filter {
    pub fn parse(pattern: &str) -> Result<Self> {
        let levels = pattern
            .split('/')
            .map(|elem| Regex::new(elem).with_context(|| format!("invalid -run element '{}' in '{}'", elem, pattern)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            pattern: pattern.to_string(),
            levels,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the case at `path` (outermost name first) is selected.
    pub fn matches(&self, path: &[&str]) -> bool {
        self.levels.iter().zip(path).all(|(re, name)| re.is_match(name))
    }
}
