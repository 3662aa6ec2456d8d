//! Recursive tree view of a node
//!
//! Every directory level is arranged by the same `ListingEngine` used for flat
//! listings, so hidden, sort, reverse and type options apply at each depth.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::Result;
use crate::listing::{Detail, ListingEngine};
use crate::tree::Node;

use super::config::OutputConfig;
use super::format::format_size;
use super::utils::{connector, continuation_prefix, write_label};

/// Directory and file counts for the footer line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub dirs: usize,
    pub files: usize,
}

pub struct TreeFormatter<W: WriteColor> {
    out: W,
    detail: Detail,
    max_depth: Option<usize>,
}

impl TreeFormatter<StandardStream> {
    pub fn stdout(config: &OutputConfig, detail: Detail) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), detail, config.max_depth)
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W, detail: Detail, max_depth: Option<usize>) -> Self {
        Self {
            out,
            detail,
            max_depth,
        }
    }

    /// Print `target` under `label`, then its arranged descendants and a count footer.
    pub fn write_tree(
        &mut self,
        engine: &ListingEngine,
        target: &Node,
        label: &str,
    ) -> Result<TreeStats> {
        // Fail before printing the root line. Files ignore the filter.
        if target.is_dir() {
            engine.config().type_filter()?;
        }

        self.write_node(target, label)?;
        let mut stats = TreeStats::default();
        if target.is_dir() {
            self.write_children(engine, target, "", 1, &mut stats)?;
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} directories, {} files",
            stats.dirs, stats.files
        )?;
        self.out.flush()?;
        Ok(stats)
    }

    fn write_children(
        &mut self,
        engine: &ListingEngine,
        dir: &Node,
        prefix: &str,
        depth: usize,
        stats: &mut TreeStats,
    ) -> Result<()> {
        if self.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }
        let children = dir.children().unwrap_or_default();
        let arranged = engine.arrange(children)?;
        let count = arranged.len();

        for (i, child) in arranged.into_iter().enumerate() {
            let is_last = i + 1 == count;
            write!(self.out, "{}{}", prefix, connector(is_last))?;
            self.write_node(child, &child.name)?;

            if child.is_dir() {
                stats.dirs += 1;
                let next = continuation_prefix(prefix, is_last);
                self.write_children(engine, child, &next, depth + 1, stats)?;
            } else {
                stats.files += 1;
            }
        }
        Ok(())
    }

    fn write_node(&mut self, node: &Node, label: &str) -> Result<()> {
        write_label(&mut self.out, label, node.is_dir())?;
        if self.detail == Detail::Long {
            write!(self.out, "  ")?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.out, "[{}]", format_size(node.size()))?;
            self.out.reset()?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
