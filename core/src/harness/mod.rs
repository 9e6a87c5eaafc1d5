//! Named case runner with soft/hard failures, runtime skips, `-run` style
//! filtering and a setup/teardown wrapper around the whole run.
//!
//! Leaves run one after another in registration order. A failure, skip or
//! panic inside one leaf is recorded against that leaf only.

mod case;
mod filter;
mod report;

#[cfg(test)]
mod filter_test;

pub use case::{Case, CaseBody, CaseContext, CaseResult, Halt, Outcome, TableRow};
pub use filter::Filter;
pub use report::{CaseReport, Report};

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use case::CaseKind;

/// Line written once before and once after a [`Suite::run_main`] run.
pub const RUN_MARKER: &str = "BEFORE UNIT TEST";

/// Knobs for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub filter: Option<Filter>,
    pub verbose: bool,
    pub platform: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            filter: None,
            verbose: false,
            platform: std::env::consts::OS.to_string(),
        }
    }
}

impl RunConfig {
    pub fn with_filter(mut self, pattern: &str) -> Result<Self> {
        self.filter = Some(Filter::parse(pattern)?);
        Ok(self)
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Ordered registry of top-level cases.
#[derive(Debug, Clone, Default)]
pub struct Suite {
    cases: Vec<Case>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level case. Names must be unique.
    pub fn register(&mut self, case: Case) -> Result<()> {
        if self.cases.iter().any(|c| c.name() == case.name()) {
            bail!("case '{}' is already registered", case.name());
        }
        self.cases.push(case);
        Ok(())
    }

    pub fn with_case(mut self, case: Case) -> Result<Self> {
        self.register(case)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(Case::name)
    }

    /// Run every selected case, writing progress lines to `out`.
    pub fn run<W: Write>(&self, config: &RunConfig, out: &mut W) -> Result<Report> {
        let mut runner = Runner {
            config,
            out,
            report: Report::default(),
        };
        let mut path = Vec::new();
        for case in &self.cases {
            runner.run_case(case, &mut path)?;
        }
        let Runner { out, report, .. } = runner;
        writeln!(out, "{}", if report.success() { "PASS" } else { "FAIL" })?;
        tracing::info!(
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "suite finished"
        );
        Ok(report)
    }

    /// [`Suite::run`] framed by [`RUN_MARKER`] before the first case and
    /// after the last one, whatever the outcomes.
    pub fn run_main<W: Write>(&self, config: &RunConfig, out: &mut W) -> Result<Report> {
        writeln!(out, "{}", RUN_MARKER)?;
        let report = self.run(config, out);
        writeln!(out, "{}", RUN_MARKER)?;
        report
    }
}

struct Runner<'a, W: Write> {
    config: &'a RunConfig,
    out: &'a mut W,
    report: Report,
}

impl<'a, W: Write> Runner<'a, W> {
    /// Returns `None` when the filter deselects the case.
    fn run_case<'c>(&mut self, case: &'c Case, path: &mut Vec<&'c str>) -> Result<Option<Outcome>> {
        path.push(case.name());
        let result = self.run_selected(case, path);
        path.pop();
        result
    }

    fn run_selected<'c>(&mut self, case: &'c Case, path: &mut Vec<&'c str>) -> Result<Option<Outcome>> {
        if let Some(filter) = &self.config.filter {
            if !filter.matches(path) {
                return Ok(None);
            }
        }

        let full_name = path.join("/");
        let depth = path.len() - 1;
        if self.config.verbose {
            writeln!(self.out, "=== RUN   {}", full_name)?;
        }
        tracing::debug!(case = %full_name, "case started");

        let started = Instant::now();
        let (outcome, messages) = match &case.kind {
            CaseKind::Leaf(body) => {
                let (outcome, messages) = self.run_leaf(&full_name, body);
                self.report.push(CaseReport {
                    name: full_name.clone(),
                    outcome,
                    messages: messages.clone(),
                    elapsed: started.elapsed(),
                });
                (outcome, messages)
            }
            CaseKind::Group(children) => {
                let mut outcomes = Vec::with_capacity(children.len());
                for child in children {
                    if let Some(outcome) = self.run_case(child, path)? {
                        outcomes.push(outcome);
                    }
                }
                (group_outcome(&outcomes), Vec::new())
            }
        };
        let elapsed = started.elapsed();

        match outcome {
            Outcome::Failed => {
                tracing::warn!(case = %full_name, elapsed_ms = elapsed.as_millis() as u64, "case failed")
            }
            _ => tracing::info!(case = %full_name, %outcome, elapsed_ms = elapsed.as_millis() as u64, "case finished"),
        }
        if self.config.verbose || outcome == Outcome::Failed {
            self.write_result(depth, &full_name, outcome, elapsed, &messages)?;
        }
        Ok(Some(outcome))
    }

    fn run_leaf(&self, full_name: &str, body: &CaseBody) -> (Outcome, Vec<String>) {
        let mut ctx = CaseContext::new(full_name, self.config.platform.as_str());
        let result = panic::catch_unwind(AssertUnwindSafe(|| body(&mut ctx)));
        let outcome = match result {
            Ok(Ok(())) if ctx.failed() => Outcome::Failed,
            Ok(Ok(())) => Outcome::Passed,
            Ok(Err(Halt::Fatal(msg))) => {
                ctx.push_message(msg);
                ctx.mark_failed();
                Outcome::Failed
            }
            Ok(Err(Halt::Skip(reason))) => {
                ctx.push_message(reason);
                // A soft failure recorded before the skip still fails the case.
                if ctx.failed() { Outcome::Failed } else { Outcome::Skipped }
            }
            Err(payload) => {
                ctx.push_message(format!("panicked: {}", panic_message(payload.as_ref())));
                ctx.mark_failed();
                Outcome::Failed
            }
        };
        (outcome, ctx.into_messages())
    }

    fn write_result(
        &mut self,
        depth: usize,
        full_name: &str,
        outcome: Outcome,
        elapsed: Duration,
        messages: &[String],
    ) -> Result<()> {
        let indent = "    ".repeat(depth);
        writeln!(
            self.out,
            "{}--- {}: {} ({:.2}s)",
            indent,
            outcome,
            full_name,
            elapsed.as_secs_f64()
        )?;
        for msg in messages {
            writeln!(self.out, "{}    {}", indent, msg)?;
        }
        Ok(())
    }
}

fn group_outcome(children: &[Outcome]) -> Outcome {
    if children.contains(&Outcome::Failed) {
        Outcome::Failed
    } else if !children.is_empty() && children.iter().all(|o| *o == Outcome::Skipped) {
        Outcome::Skipped
    } else {
        Outcome::Passed
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
