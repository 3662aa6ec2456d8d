//! Output configuration types

/// Which renderer to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One line per entry, like `ls`
    #[default]
    Lines,
    /// Pretty-printed JSON array of entries
    Json,
    /// Recursive box-drawing view of the target
    Tree,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub mode: OutputMode,
    /// Depth limit for tree output; `None` descends fully.
    pub max_depth: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            mode: OutputMode::Lines,
            max_depth: None,
        }
    }
}
