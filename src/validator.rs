//! The validation engine: discovery, checks, and aggregation in fixed order.
//!
//! Order of a run:
//! 1. markup discovery and the project-level presence check
//! 2. structural checks for each markup file
//! 3. data discovery and a parse check per data file (skipped without a data dir)
//! 4. script block extraction for each markup file
//!
//! Check failures are recorded on the [`ValidationRun`]. Only filesystem
//! faults are returned as errors, and they end the run.

use crate::checks::{
    check_json, check_markup, check_script_extraction, extract_script_blocks, HAS_MARKUP_FILES,
};
use crate::config::ValidationConfig;
use crate::discovery::discover;
use crate::errors::Result;
use crate::fs_util::read_text;
use crate::models::{FileCategory, ValidationRun};

/// Run every check against the project described by `config`.
pub fn validate(config: &ValidationConfig) -> Result<ValidationRun> {
    let mut run = ValidationRun::new();

    let markup_files = discover(config, FileCategory::Markup)?.unwrap_or_default();
    run.note(format!("Found {} HTML file(s)\n", markup_files.len()));
    run.check(HAS_MARKUP_FILES, !markup_files.is_empty());

    let mut documents = Vec::with_capacity(markup_files.len());
    for file in markup_files {
        let content = read_markup(config, &file)?;
        validate_markup(&mut run, &file, &content);
        documents.push((file, content));
    }

    if let Some(data_files) = discover(config, FileCategory::Data)? {
        run.note(format!("\nValidating {} JSON data file(s):", data_files.len()));
        for file in &data_files {
            let path = config.directory(FileCategory::Data).join(file);
            log::debug!("reading {}", path.display());
            let text = read_text(&path)?;
            validate_data(&mut run, file, &text);
        }
    }

    run.note("\nExtracting inline script blocks:");
    for (file, content) in &documents {
        validate_scripts(&mut run, file, content);
    }

    log::debug!(
        "run finished: {} check(s), {} failure(s)",
        run.results().count(),
        run.failures()
    );
    Ok(run)
}

fn read_markup(config: &ValidationConfig, file: &str) -> Result<String> {
    let path = config.directory(FileCategory::Markup).join(file);
    log::debug!("reading {}", path.display());
    read_text(&path)
}

/// Record the structural checks for one markup file.
pub fn validate_markup(run: &mut ValidationRun, file: &str, content: &str) {
    run.note(format!("\nValidating {file}:"));
    for result in check_markup(content) {
        run.record(result);
    }
}

/// Record the parse check for one data file.
pub fn validate_data(run: &mut ValidationRun, file: &str, text: &str) {
    run.note(format!("\nValidating {file}:"));
    let result = check_json(text);
    if !result.passed {
        log::debug!("{file}: {}", result.description);
    }
    run.record(result);
}

/// Record script block extraction for one markup file, if it has any blocks.
pub fn validate_scripts(run: &mut ValidationRun, file: &str, content: &str) {
    let blocks = extract_script_blocks(content);
    if let Some(result) = check_script_extraction(file, &blocks) {
        run.note(format!("  {file}: {} script block(s) found", blocks.len()));
        run.record(result);
    }
}
