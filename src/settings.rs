//! Invocation settings

use std::path::PathBuf;

/// Document read when no `--file` is given.
pub const DEFAULT_DOCUMENT: &str = "structure.json";

/// Where the tree comes from and which node to show.
#[derive(Debug, Clone)]
pub struct Settings {
    pub document: PathBuf,
    /// Path expression of the target node; empty means the root.
    pub target: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            target: String::new(),
        }
    }
}
