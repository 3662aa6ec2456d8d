//! Line-per-entry console output

use std::io::{self, Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::listing::{Detail, Entry};

use super::config::OutputConfig;
use super::format::long_prefix;
use super::utils::write_label;

/// Writes listing entries one per line, colouring directory names.
pub struct ConsoleFormatter<W: WriteColor> {
    out: W,
    detail: Detail,
}

impl ConsoleFormatter<StandardStream> {
    pub fn stdout(config: &OutputConfig, detail: Detail) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), detail)
    }
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn new(out: W, detail: Detail) -> Self {
        Self { out, detail }
    }

    pub fn write_entries(&mut self, entries: &[Entry<'_>]) -> io::Result<()> {
        for entry in entries {
            if self.detail == Detail::Long {
                write!(self.out, "{} ", long_prefix(entry.node))?;
            }
            write_label(&mut self.out, &entry.label, entry.node.is_dir())?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
