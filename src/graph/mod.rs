//! The per-Cell bookkeeping of a search session.
//!
//! Nodes link to their parent by Cell instead of by reference, so the parent links form a tree
//! of keys that is resolved through the [`NodeStore`].

mod node;
pub use self::node::{Node, Score};

mod node_store;
pub use self::node_store::NodeStore;

/// The Type used to reference a Node inside of a [`NodeStore`]
pub type NodeID = usize;
