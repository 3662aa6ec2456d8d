//! Listing pipeline: sort, reverse, filter, render

use std::borrow::Cow;

use crate::error::Result;
use crate::output::format_entry;
use crate::tree::Node;

use super::config::{Detail, ListingConfig, TypeFilter};

/// One line of a listing: the node and the label it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub node: &'a Node,
    pub label: Cow<'a, str>,
}

impl<'a> Entry<'a> {
    fn named(node: &'a Node) -> Self {
        Self {
            node,
            label: Cow::Borrowed(&node.name),
        }
    }
}

/// Produces ordered, filtered entries for a resolved node.
#[derive(Debug, Clone, Default)]
pub struct ListingEngine {
    config: ListingConfig,
}

impl ListingEngine {
    pub fn new(config: ListingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// List `target`, which was resolved from `expr`.
    ///
    /// Directories yield their arranged children. Files yield a single entry
    /// and ignore every ordering and filtering option; see [`leaf_label`].
    pub fn list<'a>(&self, target: &'a Node, expr: &str) -> Result<Vec<Entry<'a>>> {
        match target.children() {
            Some(children) => Ok(self
                .arrange(children)?
                .into_iter()
                .map(Entry::named)
                .collect()),
            None => Ok(vec![Entry {
                node: target,
                label: Cow::Owned(leaf_label(target, expr, self.config.detail)),
            }]),
        }
    }

    /// Run a children sequence through the pipeline.
    ///
    /// Order matters: sort -> reverse -> type filter -> hidden filter.
    /// An invalid type filter fails before anything is produced.
    pub fn arrange<'a>(&self, children: &'a [Node]) -> Result<Vec<&'a Node>> {
        let type_filter = self.config.type_filter()?;

        let mut nodes: Vec<&Node> = children.iter().collect();
        if self.config.sort_by_time {
            nodes = sort_by_time(nodes);
        }
        if self.config.reverse {
            nodes = reversed(nodes);
        }
        if let Some(filter) = type_filter {
            nodes = filter_type(nodes, filter);
        }
        if !self.config.include_hidden {
            nodes = filter_hidden(nodes);
        }
        Ok(nodes)
    }

    /// List and render in one step.
    pub fn lines(&self, target: &Node, expr: &str) -> Result<Vec<String>> {
        Ok(self
            .list(target, expr)?
            .iter()
            .map(|entry| format_entry(entry.node, &entry.label, self.config.detail))
            .collect())
    }
}

/// Stable sort, oldest first. Missing times sort as the epoch.
pub fn sort_by_time(mut nodes: Vec<&Node>) -> Vec<&Node> {
    nodes.sort_by_key(|n| n.mtime());
    nodes
}

pub fn reversed(mut nodes: Vec<&Node>) -> Vec<&Node> {
    nodes.reverse();
    nodes
}

pub fn filter_type(nodes: Vec<&Node>, filter: TypeFilter) -> Vec<&Node> {
    nodes
        .into_iter()
        .filter(|n| match filter {
            TypeFilter::Dir => n.is_dir(),
            TypeFilter::File => !n.is_dir(),
        })
        .collect()
}

pub fn filter_hidden(nodes: Vec<&Node>) -> Vec<&Node> {
    nodes.into_iter().filter(|n| !n.is_hidden()).collect()
}

/// Label for a file listed directly.
///
/// Brief output shows the file name. Long output shows the expression the
/// file was reached by, verbatim, behind `./`. An empty expression (a document
/// whose root is a file) falls back to the name.
pub fn leaf_label(node: &Node, expr: &str, detail: Detail) -> String {
    match detail {
        Detail::Long if !expr.is_empty() => format!("./{}", expr),
        _ => node.name.clone(),
    }
}
