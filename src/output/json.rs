//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::listing::Entry;

use super::format::format_size;

/// Serializable listing entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub permissions: String,
    pub size_bytes: u64,
    pub size_human: String,
    pub time_modified: i64,
}

impl From<&Entry<'_>> for JsonEntry {
    fn from(entry: &Entry<'_>) -> Self {
        let node = entry.node;
        Self {
            name: entry.label.to_string(),
            kind: if node.is_dir() { "dir" } else { "file" },
            permissions: node.permissions.clone(),
            size_bytes: node.size(),
            size_human: format_size(node.size()),
            time_modified: node.mtime(),
        }
    }
}

/// Write entries as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, entries: &[Entry<'_>]) -> io::Result<()> {
    let items: Vec<JsonEntry> = entries.iter().map(JsonEntry::from).collect();
    serde_json::to_writer_pretty(&mut *out, &items).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print entries as pretty-printed JSON to stdout.
pub fn print_json(entries: &[Entry<'_>]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, entries)
}
