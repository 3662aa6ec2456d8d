//! In-memory directory tree
//!
//! - `node` - the `Node` type and its document representation
//! - `store` - loading a document and resolving path expressions against it

mod node;
mod store;

pub use node::{Node, NodeKind};
pub use store::{TreeStore, path_segments, resolve};
