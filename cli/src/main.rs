use std::io::Write;
use std::process::ExitCode;
use std::sync::Once;

use anyhow::Context;
use clap::{Parser, Subcommand};
use helper_core::{harness::RunConfig, hello_world, suite::hello_world_suite};

#[cfg(test)]
mod main_test;

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "helper_core=info,helper=info";

#[derive(Debug, Parser)]
#[command(name = "helper", version, about = "Greet names and run the greeter's case suite", long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the greeting for NAME.
    Hello {
        /// Name to greet; may be empty
        #[arg(value_name = "NAME", allow_hyphen_values = true)]
        name: String,
    },
    /// Run the built-in case suite.
    Test {
        /// Only run cases whose slash separated path matches, e.g. `TestSubTest/Didik`
        #[arg(long = "run", value_name = "PATTERN")]
        run: Option<String>,
        /// Print a line for every case, not only failures
        #[arg(short, long)]
        verbose: bool,
        /// Platform identifier used by platform dependent skips
        #[arg(long, value_name = "OS", default_value = std::env::consts::OS)]
        platform: String,
    },
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn maybe_init_tracing() {
    let raw = match std::env::var("HELPER_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

fn run_config(run: Option<&str>, verbose: bool, platform: &str) -> anyhow::Result<RunConfig> {
    let config = RunConfig::default().verbose(verbose).with_platform(platform);
    match run {
        Some(pattern) => config.with_filter(pattern),
        None => Ok(config),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    maybe_init_tracing();
    let args = CliArgs::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Commands::Hello { name } => {
            tracing::debug!(name = %name, "greeting");
            writeln!(out, "{}", hello_world(&name)).context("write greeting")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Test { run, verbose, platform } => {
            let config = run_config(run.as_deref(), verbose, &platform)?;
            let suite = hello_world_suite()?;
            let report = suite.run_main(&config, &mut out)?;
            out.flush().context("flush stdout")?;
            if report.success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
