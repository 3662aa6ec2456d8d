//! Tree store: document loading and path resolution

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

use super::node::Node;

/// Holds the tree for one invocation. Nothing mutates it after load.
#[derive(Debug, Clone)]
pub struct TreeStore {
    root: Node,
}

impl TreeStore {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::DocumentMissing(path.to_path_buf()),
            _ => Error::DocumentMalformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;
        let root = serde_json::from_str(&text).map_err(|e| Error::DocumentMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(root))
    }

    /// Parse an in-memory document. Errors name the document `<memory>`.
    pub fn from_json(text: &str) -> Result<Self> {
        let root = serde_json::from_str(text).map_err(|e| Error::DocumentMalformed {
            path: "<memory>".into(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn resolve(&self, expr: &str) -> Result<&Node> {
        resolve(&self.root, expr)
    }
}

/// Split a path expression into segments.
///
/// Leading `./` and trailing `/` are dropped, as are empty and `.` segments,
/// so `""`, `"/"` and `"./"` all yield no segments.
pub fn path_segments(expr: &str) -> Vec<&str> {
    let trimmed = expr.trim_end_matches('/');
    let mut rest = trimmed;
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect()
}

/// Locate the node named by `expr` under `root`.
///
/// Never returns a partial match: a missing child or a file in the middle of
/// the path fails with the original expression.
pub fn resolve<'a>(root: &'a Node, expr: &str) -> Result<&'a Node> {
    path_segments(expr)
        .into_iter()
        .try_fold(root, |current, segment| current.child(segment))
        .ok_or_else(|| Error::PathNotFound(expr.to_string()))
}
