//! Test utilities for building tree documents.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::settings::DEFAULT_DOCUMENT;
use crate::tree::Node;

/// A temporary directory holding a tree document.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDocument {
    dir: TempDir,
}

impl TestDocument {
    /// Create an empty temporary directory with no document in it.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a temporary directory with `structure.json` set to `tree`.
    pub fn new(tree: &Value) -> Self {
        let doc = Self::empty();
        doc.write(DEFAULT_DOCUMENT, &tree.to_string());
        doc
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write raw content to a file relative to the directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        fs::write(&full_path, content).expect("Failed to write document");
        full_path
    }
}

/// A small project-like tree with hidden entries, nested directories and
/// distinct modification times.
pub fn sample_tree() -> Value {
    json!({
        "name": "interpreter",
        "size": 4096,
        "time_modified": 1699957865,
        "permissions": "drwxr-xr-x",
        "contents": [
            {"name": ".gitignore", "size": 8911, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
            {"name": "LICENSE", "size": 1071, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
            {"name": "README.md", "size": 83, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
            {"name": "ast", "size": 4096, "time_modified": 1699957739, "permissions": "drwxr-xr-x",
             "contents": [
                 {"name": "go.mod", "size": 225, "time_modified": 1699957780, "permissions": "-rw-r--r--"},
                 {"name": "ast.go", "size": 837, "time_modified": 1699957719, "permissions": "-rw-r--r--"}
             ]},
            {"name": "go.mod", "size": 60, "time_modified": 1699950073, "permissions": "-rw-r--r--"},
            {"name": "lexer", "size": 4096, "time_modified": 1699955487, "permissions": "drwxr-xr-x",
             "contents": [
                 {"name": "lexer_test.go", "size": 1729, "time_modified": 1699955126, "permissions": "-rw-r--r--"},
                 {"name": "go.mod", "size": 227, "time_modified": 1699944819, "permissions": "-rw-r--r--"},
                 {"name": "lexer.go", "size": 2886, "time_modified": 1699955487, "permissions": "-rw-r--r--"}
             ]},
            {"name": "main.go", "size": 74, "time_modified": 1699950453, "permissions": "-rw-r--r--"},
            {"name": "parser", "size": 4096, "time_modified": 1700205662, "permissions": "drwxr-xr-x",
             "contents": [
                 {"name": "parser_test.go", "size": 1342, "time_modified": 1700205662, "permissions": "-rw-r--r--"},
                 {"name": "parser.go", "size": 1622, "time_modified": 1700205654, "permissions": "-rw-r--r--"},
                 {"name": "go.mod", "size": 533, "time_modified": 1699958000, "permissions": "-rw-r--r--"}
             ]},
            {"name": "token", "size": 4096, "time_modified": 1699954070, "permissions": "drwxr-xr-x",
             "contents": [
                 {"name": "token.go", "size": 910, "time_modified": 1699954070, "permissions": "-rw-r--r--"},
                 {"name": "go.mod", "size": 66, "time_modified": 1699944730, "permissions": "-rw-r--r--"}
             ]}
        ]
    })
}

/// Build a tree `depth` levels deep with `breadth` files and `breadth`
/// directories per level. Every fifth file is hidden.
pub fn wide_tree(breadth: usize, depth: usize) -> Node {
    Node::dir("root", wide_children(breadth, depth))
}

fn wide_children(breadth: usize, depth: usize) -> Vec<Node> {
    let mut children: Vec<Node> = (0..breadth)
        .map(|i| {
            let name = if i % 5 == 0 {
                format!(".file{}", i)
            } else {
                format!("file{}", i)
            };
            Node::file(name, "-rw-r--r--", (i as u64) * 1000)
                .with_time(((i * 7919) % 1000) as i64)
        })
        .collect();
    if depth > 0 {
        children.extend((0..breadth).map(|i| {
            Node::dir(format!("dir{}", i), wide_children(breadth, depth - 1))
                .with_permissions("drwxr-xr-x")
                .with_time(i as i64)
        }));
    }
    children
}
