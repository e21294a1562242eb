pub mod checks;
pub mod config;
pub mod discovery;
pub mod errors;
pub(crate) mod fs_util;
pub mod models;
pub mod report;
pub mod validator;

// Re-export key types at crate root for convenience.
pub use checks::{check_json, check_markup, extract_script_blocks, MarkupCheck, MARKUP_CHECKS};
pub use config::{default_root, ValidationConfig};
pub use discovery::{discover, select_by_extension};
pub use errors::{Result, SitecheckError};
pub use models::{CheckResult, Entry, FileCategory, ValidationRun};
pub use validator::validate;
