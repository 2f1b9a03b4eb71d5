pub mod harvest;
pub mod query;

use std::path::PathBuf;

pub use harvest::harvest;
pub use query::query;

/// Default log location, shared by both phases.
pub fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("normals-log.txt")
}
