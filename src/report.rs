//! Line-oriented text report for a finished run.
//!
//! Passing checks and notes go to `out`, failing checks and the failure
//! summary go to `err`.

use std::io::{self, Write};

use crate::models::{Entry, ValidationRun};

/// Width of the `=` rule printed before the summary.
const SEPARATOR_WIDTH: usize = 40;

/// Write the full report for `run`.
pub fn render<O, E>(run: &ValidationRun, out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    for entry in run.entries() {
        match entry {
            Entry::Note(line) => writeln!(out, "{line}")?,
            Entry::Check(r) if r.passed => writeln!(out, "  PASS: {}", r.description)?,
            Entry::Check(r) => writeln!(err, "  FAIL: {}", r.description)?,
        }
    }

    writeln!(out, "\n{}", "=".repeat(SEPARATOR_WIDTH))?;
    if run.passed() {
        writeln!(out, "All checks passed!")?;
    } else {
        writeln!(err, "{} check(s) FAILED", run.failures())?;
    }
    Ok(())
}

/// Write the report to the process's stdout and stderr.
pub fn print(run: &ValidationRun) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    render(run, &mut stdout.lock(), &mut stderr.lock())
}
