//! Run state shared by every check: results, report notes, and the failure count.

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub description: String,
    pub passed: bool,
}

impl CheckResult {
    #[must_use]
    pub fn new(description: impl Into<String>, passed: bool) -> Self {
        Self {
            description: description.into(),
            passed,
        }
    }
}

/// Which check set applies to a discovered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Primary documents (`.html` in the project root).
    Markup,
    /// Structured data (`.json` under `assets/data`).
    Data,
}

/// One line-producing event in the order it happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Informational line (discovery summaries, headings, block counts).
    Note(String),
    /// Result of a check.
    Check(CheckResult),
}

/// State of one validation run.
///
/// Every check goes through [`ValidationRun::record`], which keeps the
/// failure count equal to the number of failing results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationRun {
    entries: Vec<Entry>,
    failures: usize,
}

impl ValidationRun {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check outcome, counting it if it failed. Returns `passed`.
    pub fn record(&mut self, result: CheckResult) -> bool {
        let passed = result.passed;
        if !passed {
            self.failures += 1;
        }
        self.entries.push(Entry::Check(result));
        passed
    }

    /// Shorthand for recording `CheckResult::new(description, passed)`.
    pub fn check(&mut self, description: impl Into<String>, passed: bool) -> bool {
        self.record(CheckResult::new(description, passed))
    }

    /// Append an informational line to the report.
    pub fn note(&mut self, line: impl Into<String>) {
        self.entries.push(Entry::Note(line.into()));
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Check results in the order they were recorded.
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Check(r) => Some(r),
            Entry::Note(_) => None,
        })
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures == 0
    }

    /// Process exit status: 0 when every check passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}
