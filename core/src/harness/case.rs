use std::fmt;
use std::sync::Arc;

/// Terminal state of a single leaf case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Passed => "PASS",
            Outcome::Failed => "FAIL",
            Outcome::Skipped => "SKIP",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stops the remaining statements of the current case.
///
/// Returned from a case body through `?`. Sibling cases are not affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// Hard failure: the case is marked failed with this message.
    Fatal(String),
    /// The case is marked skipped with this reason.
    Skip(String),
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Halt::Fatal(msg) => write!(f, "fatal: {}", msg),
            Halt::Skip(reason) => write!(f, "skipped: {}", reason),
        }
    }
}

impl std::error::Error for Halt {}

/// What a case body returns.
pub type CaseResult = Result<(), Halt>;

pub type CaseBody = Arc<dyn Fn(&mut CaseContext) -> CaseResult + Send + Sync>;

/// Per-invocation state handed to a case body.
#[derive(Debug)]
pub struct CaseContext {
    name: String,
    platform: String,
    messages: Vec<String>,
    failed: bool,
}

impl CaseContext {
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platform: platform.into(),
            messages: Vec::new(),
            failed: false,
        }
    }

    /// Full slash separated path of the running case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Platform identifier of the current run (`linux`, `macos`, `windows`, ...).
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Record a soft failure; the body keeps running.
    pub fn error(&mut self, msg: impl Into<String>) {
        self.failed = true;
        self.messages.push(msg.into());
    }

    /// Soft comparison. Records a failure on mismatch and returns whether
    /// the values were equal.
    pub fn check_eq<E, A>(&mut self, expected: E, actual: A, msg: &str) -> bool
    where
        E: PartialEq<A> + fmt::Debug,
        A: fmt::Debug,
    {
        if expected == actual {
            return true;
        }
        self.error(mismatch(&expected, &actual, msg));
        false
    }

    /// Hard failure. Use as `return ctx.fatal(..)` or `ctx.fatal(..)?`.
    pub fn fatal(&mut self, msg: impl Into<String>) -> CaseResult {
        Err(Halt::Fatal(msg.into()))
    }

    /// Hard comparison: a mismatch halts the case.
    pub fn require_eq<E, A>(&mut self, expected: E, actual: A, msg: &str) -> CaseResult
    where
        E: PartialEq<A> + fmt::Debug,
        A: fmt::Debug,
    {
        if expected == actual {
            Ok(())
        } else {
            Err(Halt::Fatal(mismatch(&expected, &actual, msg)))
        }
    }

    /// Skip the rest of the case.
    pub fn skip(&mut self, reason: impl Into<String>) -> CaseResult {
        Err(Halt::Skip(reason.into()))
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub(crate) fn push_message(&mut self, msg: String) {
        self.messages.push(msg);
    }

    pub(crate) fn mark_failed(&mut self) {
        self.failed = true;
    }

    pub(crate) fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

fn mismatch(expected: &dyn fmt::Debug, actual: &dyn fmt::Debug, msg: &str) -> String {
    format!("{}: expected {:?}, actual {:?}", msg, expected, actual)
}

/// One `{name, request, expected}` row of a table driven case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub name: &'static str,
    pub request: &'static str,
    pub expected: &'static str,
}

impl TableRow {
    pub const fn new(name: &'static str, request: &'static str, expected: &'static str) -> Self {
        Self {
            name,
            request,
            expected,
        }
    }
}

#[derive(Clone)]
pub(crate) enum CaseKind {
    Leaf(CaseBody),
    Group(Vec<Case>),
}

/// A named node of the suite: either a leaf body or a group of children.
#[derive(Clone)]
pub struct Case {
    name: String,
    pub(crate) kind: CaseKind,
}

impl Case {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut CaseContext) -> CaseResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: CaseKind::Leaf(Arc::new(body)),
        }
    }

    pub fn group(name: impl Into<String>, children: Vec<Case>) -> Self {
        Self {
            name: name.into(),
            kind: CaseKind::Group(children),
        }
    }

    /// Build a group with one child per row, each running `body` in isolation.
    pub fn table<F>(name: impl Into<String>, rows: &[TableRow], body: F) -> Self
    where
        F: Fn(&mut CaseContext, &TableRow) -> CaseResult + Send + Sync + 'static,
    {
        let body = Arc::new(body);
        let children = rows
            .iter()
            .copied()
            .map(|row| {
                let body = Arc::clone(&body);
                Case::new(row.name, move |ctx| body(ctx, &row))
            })
            .collect();
        Self::group(name, children)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Case] {
        match &self.kind {
            CaseKind::Leaf(_) => &[],
            CaseKind::Group(children) => children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, CaseKind::Group(_))
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CaseKind::Leaf(_) => write!(f, "Case({})", self.name),
            CaseKind::Group(children) => f.debug_tuple("Group").field(&self.name).field(children).finish(),
        }
    }
}
