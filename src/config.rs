//! Locations and file extensions a run inspects.

use std::path::{Path, PathBuf};

use crate::errors::{Result, SitecheckError};
use crate::models::FileCategory;

/// Extension identifying markup files.
pub const MARKUP_EXTENSION: &str = ".html";

/// Extension identifying structured data files.
pub const DATA_EXTENSION: &str = ".json";

/// Data subdirectory, relative to the project root.
pub const DATA_SUBDIR: &[&str] = &["assets", "data"];

/// Where to look and what to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Project root; markup files live directly inside it.
    pub root: PathBuf,
    pub markup_extension: String,
    /// Data directory, relative to `root`.
    pub data_dir: PathBuf,
    pub data_extension: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::for_root(".")
    }
}

impl ValidationConfig {
    /// Standard layout rooted at `root`.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            markup_extension: MARKUP_EXTENSION.to_string(),
            data_dir: DATA_SUBDIR.iter().collect(),
            data_extension: DATA_EXTENSION.to_string(),
        }
    }

    /// Extension that selects files of the given category.
    #[must_use]
    pub fn extension(&self, category: FileCategory) -> &str {
        match category {
            FileCategory::Markup => &self.markup_extension,
            FileCategory::Data => &self.data_extension,
        }
    }

    /// Directory scanned for files of the given category.
    #[must_use]
    pub fn directory(&self, category: FileCategory) -> PathBuf {
        match category {
            FileCategory::Markup => self.root.clone(),
            FileCategory::Data => self.root.join(&self.data_dir),
        }
    }
}

/// Project root for an executable at `exe`: the parent of its directory.
///
/// A tool installed as `<project>/tools/sitecheck` validates `<project>`.
pub fn root_from_exe(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| SitecheckError::ProjectRoot {
            exe: exe.to_path_buf(),
        })
}

/// Project root for the running executable.
pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    root_from_exe(&exe)
}
