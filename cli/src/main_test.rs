mod tests {
    use crate::*;

    #[test]
    fn test_cli_args_hello() {
        let args = CliArgs::try_parse_from(["helper", "hello", "Didik"]).expect("should parse");
        match args.command {
            Commands::Hello { name } => assert_eq!(name, "Didik"),
            other => panic!("expected hello command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_args_hello_accepts_empty_name() {
        let args = CliArgs::try_parse_from(["helper", "hello", ""]).expect("should parse");
        match args.command {
            Commands::Hello { name } => assert!(name.is_empty()),
            other => panic!("expected hello command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_args_test_defaults() {
        let args = CliArgs::try_parse_from(["helper", "test"]).expect("should parse");
        match args.command {
            Commands::Test { run, verbose, platform } => {
                assert!(run.is_none());
                assert!(!verbose);
                assert_eq!(platform, std::env::consts::OS);
            }
            other => panic!("expected test command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_args_test_with_run_and_platform() {
        let args = CliArgs::try_parse_from([
            "helper",
            "test",
            "--run",
            "TestSubTest/Didik",
            "-v",
            "--platform",
            "windows",
        ])
        .expect("should parse");
        match args.command {
            Commands::Test { run, verbose, platform } => {
                assert_eq!(run.as_deref(), Some("TestSubTest/Didik"));
                assert!(verbose);
                assert_eq!(platform, "windows");
            }
            other => panic!("expected test command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_args_requires_subcommand() {
        assert!(CliArgs::try_parse_from(["helper"]).is_err());
    }

    #[test]
    fn test_run_config_rejects_bad_pattern() {
        let err = run_config(Some("Test("), false, "linux").unwrap_err();
        assert!(err.to_string().contains("invalid -run element"));
    }

    #[test]
    fn test_run_config_builds_filter() {
        let config = run_config(Some("TestSkip"), true, "darwin").expect("valid config");
        assert!(config.verbose);
        assert_eq!(config.platform, "darwin");
        assert_eq!(config.filter.as_ref().map(|f| f.pattern()), Some("TestSkip"));
    }

    #[test]
    fn test_env_toggle_and_filter_expr() {
        assert!(env_toggle_enabled("1"));
        assert!(env_toggle_enabled("helper_core=debug"));
        assert!(!env_toggle_enabled(""));
        assert!(!env_toggle_enabled("off"));
        assert_eq!(filter_expr_from("true"), None);
        assert_eq!(filter_expr_from(" helper_core=debug "), Some("helper_core=debug".to_string()));
    }
}
