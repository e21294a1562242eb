//! Check definitions.
//!
//! Every check is a named predicate over raw file text. None of them parse
//! the document; a file can satisfy all markup checks while still having
//! mismatched tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::CheckResult;

/// Description of the project-level markup presence check.
pub const HAS_MARKUP_FILES: &str = "At least one HTML file exists";

/// Description of a passing data file check.
pub const VALID_JSON: &str = "Valid JSON";

/// `<title>…</title>`, body may span lines.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>.*</title>").expect("title regex must compile"));

/// `lang=` somewhere inside the `<html ...>` opening tag.
static LANG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html[^>]+lang=").expect("lang regex must compile"));

static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head[\s>]").expect("head regex must compile"));

static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body[\s>]").expect("body regex must compile"));

/// A script element from its opening tag to the nearest closing tag.
static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("script regex must compile")
});

/// A named predicate applied to every markup file.
#[derive(Clone, Copy)]
pub struct MarkupCheck {
    pub description: &'static str,
    predicate: fn(&str) -> bool,
}

impl MarkupCheck {
    /// Evaluate the check against a file's content.
    #[must_use]
    pub fn evaluate(&self, content: &str) -> CheckResult {
        CheckResult::new(self.description, (self.predicate)(content))
    }
}

impl std::fmt::Debug for MarkupCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupCheck")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// The structural checks run against each markup file, in report order.
pub const MARKUP_CHECKS: &[MarkupCheck] = &[
    MarkupCheck {
        description: "File is not empty",
        predicate: is_non_empty,
    },
    MarkupCheck {
        description: "Has DOCTYPE declaration",
        predicate: has_doctype,
    },
    MarkupCheck {
        description: "Has <title> element",
        predicate: has_title,
    },
    MarkupCheck {
        description: "Has lang attribute on <html>",
        predicate: has_lang,
    },
    MarkupCheck {
        description: "Has <head> section",
        predicate: has_head,
    },
    MarkupCheck {
        description: "Has <body> section",
        predicate: has_body,
    },
];

/// Byte order mark some editors write at the start of UTF-8 files.
const BOM: char = '\u{FEFF}';

/// `content` without surrounding whitespace or byte order marks.
fn trimmed(content: &str) -> &str {
    content.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

fn is_non_empty(content: &str) -> bool {
    !trimmed(content).is_empty()
}

fn has_doctype(content: &str) -> bool {
    trimmed(content).to_lowercase().starts_with("<!doctype html")
}

fn has_title(content: &str) -> bool {
    TITLE_RE.is_match(content)
}

fn has_lang(content: &str) -> bool {
    LANG_RE.is_match(content)
}

fn has_head(content: &str) -> bool {
    HEAD_RE.is_match(content)
}

fn has_body(content: &str) -> bool {
    BODY_RE.is_match(content)
}

/// Run every markup check against `content`, in order.
#[must_use]
pub fn check_markup(content: &str) -> Vec<CheckResult> {
    MARKUP_CHECKS.iter().map(|c| c.evaluate(content)).collect()
}

/// Parse `text` as JSON; the failure description carries the parser message.
///
/// Trailing data after the top-level value is rejected.
#[must_use]
pub fn check_json(text: &str) -> CheckResult {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => CheckResult::new(VALID_JSON, true),
        Err(e) => CheckResult::new(format!("{VALID_JSON} ({e})"), false),
    }
}

/// Every inline script element in `content`, including its tags.
#[must_use]
pub fn extract_script_blocks(content: &str) -> Vec<&str> {
    SCRIPT_RE.find_iter(content).map(|m| m.as_str()).collect()
}

/// Confirmation that script blocks in `file` could be extracted.
///
/// Returns `None` when there are no blocks; that is not a failure and
/// records nothing.
#[must_use]
pub fn check_script_extraction(file: &str, blocks: &[&str]) -> Option<CheckResult> {
    if blocks.is_empty() {
        return None;
    }
    Some(CheckResult::new(
        format!("{file} script blocks extracted"),
        true,
    ))
}
