//! Node types for the serialized tree

use serde::Deserialize;

/// One file or directory in the tree.
///
/// Documents mark directories by the presence of a `children` (or `contents`)
/// array; that attribute is turned into [`NodeKind::Directory`] on load so the
/// rest of the crate can match on the kind instead of probing attributes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    pub name: String,
    pub permissions: String,
    pub time_modified: Option<i64>,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Directory { size: u64, children: Vec<Node> },
    File { size: u64 },
}

impl Node {
    pub fn file(name: impl Into<String>, permissions: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            permissions: permissions.into(),
            time_modified: None,
            kind: NodeKind::File { size },
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            permissions: String::new(),
            time_modified: None,
            kind: NodeKind::Directory { size: 0, children },
        }
    }

    pub fn with_time(mut self, time_modified: i64) -> Self {
        self.time_modified = Some(time_modified);
        self
    }

    pub fn with_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.permissions = permissions.into();
        self
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Names starting with a dot are hidden from directory listings.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn size(&self) -> u64 {
        match self.kind {
            NodeKind::Directory { size, .. } | NodeKind::File { size } => size,
        }
    }

    /// Modification time, with a missing value read as the epoch.
    pub fn mtime(&self) -> i64 {
        self.time_modified.unwrap_or(0)
    }

    pub fn children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Directory { children, .. } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// First child with the given name. Always `None` for files.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children()?.iter().find(|c| c.name == name)
    }
}

/// Wire shape of a node, before the directory/file split.
#[derive(Debug, Deserialize)]
struct RawNode {
    name: String,
    #[serde(default)]
    permissions: String,
    size: Option<u64>,
    time_modified: Option<i64>,
    #[serde(alias = "contents")]
    children: Option<Vec<Node>>,
}

impl TryFrom<RawNode> for Node {
    type Error = String;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let kind = match (raw.children, raw.size) {
            (Some(children), size) => NodeKind::Directory {
                size: size.unwrap_or(0),
                children,
            },
            (None, Some(size)) => NodeKind::File { size },
            (None, None) => return Err(format!("file '{}' has no size", raw.name)),
        };
        Ok(Self {
            name: raw.name,
            permissions: raw.permissions,
            time_modified: raw.time_modified,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_attribute_marks_directory() {
        let node: Node = serde_json::from_str(r#"{"name": "empty", "children": []}"#).unwrap();
        assert!(node.is_dir());
        assert_eq!(node.children().map(<[Node]>::len), Some(0));
    }

    #[test]
    fn test_contents_alias_accepted() {
        let json = r#"{
            "name": "interpreter",
            "size": 4096,
            "permissions": "drwxr-xr-x",
            "time_modified": 1699957865,
            "contents": [
                {"name": "go.mod", "size": 60, "permissions": "-rw-r--r--", "time_modified": 1699957865}
            ]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert!(node.is_dir());
        assert_eq!(node.size(), 4096);
        let child = node.child("go.mod").unwrap();
        assert!(!child.is_dir());
        assert_eq!(child.size(), 60);
        assert_eq!(child.permissions, "-rw-r--r--");
    }

    #[test]
    fn test_file_without_size_rejected() {
        let err = serde_json::from_str::<Node>(r#"{"name": "a.txt", "permissions": "-rw-r--r--"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("a.txt"), "{}", err);
    }

    #[test]
    fn test_missing_time_reads_as_epoch() {
        let node: Node = serde_json::from_str(r#"{"name": "a", "size": 1}"#).unwrap();
        assert_eq!(node.time_modified, None);
        assert_eq!(node.mtime(), 0);
    }

    #[test]
    fn test_child_first_match_wins() {
        let dir = Node::dir(
            "root",
            vec![
                Node::file("dup", "first", 1),
                Node::file("dup", "second", 2),
            ],
        );
        assert_eq!(dir.child("dup").unwrap().permissions, "first");
        assert!(Node::file("f", "", 0).child("dup").is_none());
    }

    #[test]
    fn test_hidden_by_leading_dot() {
        assert!(Node::dir(".git", vec![]).is_hidden());
        assert!(!Node::file("a.txt", "", 0).is_hidden());
    }
}
