//! Listing output
//!
//! - `format` - size, timestamp and entry line formatting
//! - `config` - output configuration types
//! - `console` - one line per entry, like `ls`
//! - `json` - JSON output
//! - `tree` - recursive box-drawing view
//! - `utils` - shared prefix and colour helpers

mod config;
mod console;
mod format;
mod json;
mod tree;
mod utils;

pub use config::{OutputConfig, OutputMode};
pub use console::ConsoleFormatter;
pub use format::{format_entry, format_size, format_timestamp, format_timestamp_in, long_prefix};
pub use json::{JsonEntry, print_json, write_json};
pub use tree::{TreeFormatter, TreeStats};
pub use utils::{connector, continuation_prefix};
