//! Shared utility functions for output formatting

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Calculate the prefix for the children of an entry in tree output.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Write an entry label, bold blue for directories.
pub fn write_label<W: WriteColor>(out: &mut W, label: &str, is_dir: bool) -> io::Result<()> {
    if is_dir {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", label)?;
        out.reset()?;
    } else {
        write!(out, "{}", label)?;
    }
    Ok(())
}
