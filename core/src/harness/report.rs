use std::time::Duration;

use super::case::Outcome;

/// Result of one leaf case.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub outcome: Outcome,
    pub messages: Vec<String>,
    pub elapsed: Duration,
}

/// Leaf results of a run, in execution order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    cases: Vec<CaseReport>,
}

impl Report {
    pub(crate) fn push(&mut self, case: CaseReport) {
        self.cases.push(case);
    }

    pub fn cases(&self) -> &[CaseReport] {
        &self.cases
    }

    pub fn find(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|c| c.name == name)
    }

    pub fn passed(&self) -> usize {
        self.count(Outcome::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(Outcome::Skipped)
    }

    /// True when no leaf failed. Skips do not count against success.
    pub fn success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.cases.iter().filter(|c| c.outcome == outcome).count()
    }
}
