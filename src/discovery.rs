//! Extension-based file discovery.
//!
//! [`select_by_extension`] is the pure part: it filters and orders a list of
//! entry names. [`discover`] wires it to a directory listing.

use crate::config::ValidationConfig;
use crate::errors::Result;
use crate::fs_util::{exists, read_entry_names};
use crate::models::FileCategory;

/// Names ending with `extension` (case-sensitive), sorted.
///
/// Sorting makes repeated runs over the same directory report in the same
/// order regardless of how the platform lists entries.
#[must_use]
pub fn select_by_extension<I, S>(names: I, extension: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut selected: Vec<String> = names
        .into_iter()
        .map(Into::into)
        .filter(|name| name.ends_with(extension))
        .collect();
    selected.sort();
    selected
}

/// Discover files of `category` under the configured directory.
///
/// Returns `Ok(None)` when the data directory does not exist; that case is
/// skipped rather than failed. The project root is always listed, so a
/// missing root is an error.
pub fn discover(config: &ValidationConfig, category: FileCategory) -> Result<Option<Vec<String>>> {
    let dir = config.directory(category);
    if category == FileCategory::Data && !exists(&dir) {
        log::debug!("data directory {} not present; skipping", dir.display());
        return Ok(None);
    }
    let names = read_entry_names(&dir)?;
    let selected = select_by_extension(names, config.extension(category));
    log::debug!(
        "discovered {} {:?} file(s) in {}",
        selected.len(),
        category,
        dir.display()
    );
    Ok(Some(selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SitecheckError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn select_filters_by_suffix() {
        let names = ["index.html", "style.css", "about.html", "README.md"];
        assert_eq!(
            select_by_extension(names, ".html"),
            vec!["about.html", "index.html"]
        );
    }

    #[test]
    fn select_is_case_sensitive() {
        let names = ["INDEX.HTML", "page.Html", "ok.html"];
        assert_eq!(select_by_extension(names, ".html"), vec!["ok.html"]);
    }

    #[test]
    fn select_matches_extension_only() {
        let names = ["index.html.bak", "html", "x.xhtml"];
        // "x.xhtml" ends with "html" but not ".html".
        assert!(select_by_extension(names, ".html").is_empty());
    }

    #[test]
    fn select_empty_input() {
        let names: Vec<String> = Vec::new();
        assert!(select_by_extension(names, ".json").is_empty());
    }

    #[test]
    fn discover_markup_does_not_recurse() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("nested.html"), "").unwrap();

        let config = ValidationConfig::for_root(dir.path());
        let found = discover(&config, FileCategory::Markup).unwrap();
        assert_eq!(found, Some(vec!["index.html".to_string()]));
    }

    #[test]
    fn discover_data_absent_dir_is_none() {
        let dir = tempdir().unwrap();
        let config = ValidationConfig::for_root(dir.path());
        assert_eq!(discover(&config, FileCategory::Data).unwrap(), None);
    }

    #[test]
    fn discover_data_lists_json_only() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("assets").join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("b.json"), "{}").unwrap();
        fs::write(data.join("a.json"), "[]").unwrap();
        fs::write(data.join("notes.txt"), "").unwrap();

        let config = ValidationConfig::for_root(dir.path());
        let found = discover(&config, FileCategory::Data).unwrap();
        assert_eq!(found, Some(vec!["a.json".to_string(), "b.json".to_string()]));
    }

    #[test]
    fn discover_missing_root_is_error() {
        let config = ValidationConfig::for_root("/nonexistent/sitecheck/root");
        let err = discover(&config, FileCategory::Markup).unwrap_err();
        assert!(matches!(err, SitecheckError::ListDir { .. }));
    }
}
