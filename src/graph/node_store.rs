use super::{Node, NodeID};
use crate::Cell;

use hashbrown::HashMap;

macro_rules! missing_node {
	($pos:expr) => {
		|| panic!("No Node at {} in {}:{}", $pos, file!(), line!())
	};
}

/// Owns every [`Node`] of a search session.
///
/// Nodes are created lazily by [`get_or_create`](NodeStore::get_or_create) and are only ever
/// dropped all at once by [`clear`](NodeStore::clear).
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
	nodes: slab::Slab<Node>,
	pos_map: HashMap<Cell, NodeID>,
}

impl NodeStore {
	/// Creates an empty NodeStore
	pub fn new() -> Self {
		Self::default()
	}

	/// The number of Nodes in the store
	pub fn len(&self) -> usize {
		self.pos_map.len()
	}

	/// `true` if no Node has been created yet
	pub fn is_empty(&self) -> bool {
		self.pos_map.is_empty()
	}

	/// Returns the Node for `pos`, creating an unscored one if necessary.
	///
	/// Repeated calls with the same Cell return the same NodeID until the store is cleared.
	pub fn get_or_create(&mut self, pos: Cell) -> NodeID {
		if let Some(&id) = self.pos_map.get(&pos) {
			return id;
		}
		let id = self.nodes.insert(Node::new(pos));
		self.pos_map.insert(pos, id);
		id
	}

	/// The NodeID of `pos`, if a Node was created for it
	pub fn id_at(&self, pos: Cell) -> Option<NodeID> {
		self.pos_map.get(&pos).copied()
	}

	/// The Node of `pos`, if one was created for it
	pub fn get(&self, pos: Cell) -> Option<&Node> {
		self.id_at(pos).map(|id| &self.nodes[id])
	}

	/// The Node of `pos`.
	///
	/// ## Panics
	/// if no Node was created for `pos`
	#[track_caller]
	pub fn expect(&self, pos: Cell) -> &Node {
		self.get(pos).unwrap_or_else(missing_node!(pos))
	}

	/// Iterates over all Nodes in the order they were created
	pub fn iter(&self) -> slab::Iter<Node> {
		self.nodes.iter()
	}

	/// Drops every Node
	pub fn clear(&mut self) {
		self.nodes.clear();
		self.pos_map.clear();
	}
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeStore {
	type Output = Node;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Node {
		&self.nodes[index]
	}
}
impl IndexMut<NodeID> for NodeStore {
	#[track_caller]
	fn index_mut(&mut self, index: NodeID) -> &mut Node {
		&mut self.nodes[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::Score;

	#[test]
	fn get_or_create_is_idempotent() {
		let mut store = NodeStore::new();
		let a = store.get_or_create(Cell::new(2, -3));
		let b = store.get_or_create(Cell::new(2, -3));
		assert_eq!(a, b);
		assert_eq!(store.len(), 1);

		// both ids share the same state
		store[a].score = Some(Score::new(10, 20));
		assert_eq!(store[b].score, Some(Score { g: 10, h: 20, f: 30 }));
	}

	#[test]
	fn lookup() {
		let mut store = NodeStore::new();
		let id = store.get_or_create(Cell::new(0, 1));
		store.get_or_create(Cell::new(1, 0));

		assert_eq!(store.id_at(Cell::new(0, 1)), Some(id));
		assert_eq!(store.id_at(Cell::new(5, 5)), None);
		assert_eq!(store.expect(Cell::new(1, 0)).pos, Cell::new(1, 0));
		assert!(!store.expect(Cell::new(1, 0)).is_scored());
	}

	#[test]
	fn clear() {
		let mut store = NodeStore::new();
		store.get_or_create(Cell::new(0, 0));
		store.get_or_create(Cell::new(0, 1));
		store.clear();

		assert!(store.is_empty());
		assert_eq!(store.get(Cell::new(0, 0)), None);
		assert_eq!(store.iter().count(), 0);
	}

	#[test]
	#[should_panic(expected = "No Node at (7, 7)")]
	fn expect_missing() {
		NodeStore::new().expect(Cell::new(7, 7));
	}
}
