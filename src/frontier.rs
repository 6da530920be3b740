//! The Open Set and the Closed Set of a search

use crate::graph::NodeID;
use crate::Cost;

use hashbrown::{HashMap, HashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrontierElement {
	id: NodeID,
	f: Cost,
	rank: u64,
}
impl PartialOrd for FrontierElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for FrontierElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.f.cmp(&self.f).then_with(|| rhs.rank.cmp(&self.rank))
	}
}

/// The Nodes that have been discovered but not finalized yet, also known as the Open Set.
///
/// ## Tie-break
/// [`peek_min`](Frontier::peek_min) returns the Node with the lowest `f`. Among Nodes with the
/// same `f`, the one that entered the Frontier first wins. Lowering the `f` of a Node that is
/// already on the Frontier does not change when it entered.
///
/// ```
/// # use incremental_astar::frontier::Frontier;
/// let mut frontier = Frontier::new();
/// frontier.insert(0, 30);
/// frontier.insert(1, 20);
/// frontier.insert(2, 20);
/// assert_eq!(frontier.peek_min(), Some(1));
///
/// frontier.insert(2, 10);
/// assert_eq!(frontier.peek_min(), Some(2));
///
/// frontier.remove(2);
/// frontier.remove(1);
/// assert_eq!(frontier.peek_min(), Some(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Frontier {
	heap: BinaryHeap<FrontierElement>,
	live: HashMap<NodeID, (Cost, u64)>,
	next_rank: u64,
}

impl Frontier {
	/// Creates an empty Frontier
	pub fn new() -> Frontier {
		Frontier::default()
	}

	/// The number of Nodes on the Frontier
	pub fn len(&self) -> usize {
		self.live.len()
	}

	/// `true` if there are no Nodes on the Frontier
	pub fn is_empty(&self) -> bool {
		self.live.is_empty()
	}

	/// `true` if `id` is on the Frontier
	pub fn contains(&self, id: NodeID) -> bool {
		self.live.contains_key(&id)
	}

	/// The `f` that `id` was last inserted with
	pub fn f(&self, id: NodeID) -> Option<Cost> {
		self.live.get(&id).map(|&(f, _)| f)
	}

	/// Adds `id` with the total score `f`, or updates `f` if it is already on the Frontier.
	pub fn insert(&mut self, id: NodeID, f: Cost) {
		let rank = match self.live.get_mut(&id) {
			Some(entry) => {
				entry.0 = f;
				entry.1
			}
			None => {
				let rank = self.next_rank;
				self.next_rank += 1;
				self.live.insert(id, (f, rank));
				rank
			}
		};
		self.heap.push(FrontierElement { id, f, rank });
	}

	/// Removes `id`. Returns `false` if it wasn't on the Frontier.
	pub fn remove(&mut self, id: NodeID) -> bool {
		self.live.remove(&id).is_some()
	}

	/// The Node with the lowest `f`, see [Tie-break](#tie-break).
	///
	/// The Node stays on the Frontier.
	pub fn peek_min(&mut self) -> Option<NodeID> {
		while let Some(&FrontierElement { id, f, rank }) = self.heap.peek() {
			if self.live.get(&id) == Some(&(f, rank)) {
				return Some(id);
			}
			// outdated by a later insert or a remove
			self.heap.pop();
		}
		None
	}

	/// Iterates over the Nodes on the Frontier in no particular order
	pub fn iter(&self) -> impl Iterator<Item = NodeID> + '_ {
		self.live.keys().copied()
	}

	/// Removes every Node
	pub fn clear(&mut self) {
		self.heap.clear();
		self.live.clear();
		self.next_rank = 0;
	}
}

/// The Nodes that have been finalized, also known as the Closed Set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet {
	visited: HashSet<NodeID>,
}

impl VisitedSet {
	/// Creates an empty VisitedSet
	pub fn new() -> VisitedSet {
		VisitedSet::default()
	}

	/// Marks `id` as finalized. Returns `false` if it already was.
	pub fn insert(&mut self, id: NodeID) -> bool {
		self.visited.insert(id)
	}

	/// `true` if `id` has been finalized
	pub fn contains(&self, id: NodeID) -> bool {
		self.visited.contains(&id)
	}

	/// The number of finalized Nodes
	pub fn len(&self) -> usize {
		self.visited.len()
	}

	/// `true` if no Node has been finalized
	pub fn is_empty(&self) -> bool {
		self.visited.is_empty()
	}

	/// Iterates over the finalized Nodes in no particular order
	pub fn iter(&self) -> impl Iterator<Item = NodeID> + '_ {
		self.visited.iter().copied()
	}

	/// Forgets every Node
	pub fn clear(&mut self) {
		self.visited.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lowest_f_first() {
		let mut frontier = Frontier::new();
		frontier.insert(4, 50);
		frontier.insert(7, 12);
		frontier.insert(1, 40);
		assert_eq!(frontier.peek_min(), Some(7));
		// peeking does not remove
		assert_eq!(frontier.peek_min(), Some(7));
		assert_eq!(frontier.len(), 3);
	}

	#[test]
	fn ties_go_to_the_earliest_insert() {
		let mut frontier = Frontier::new();
		frontier.insert(9, 30);
		frontier.insert(3, 30);
		frontier.insert(5, 30);
		assert_eq!(frontier.peek_min(), Some(9));

		// rescoring keeps the original position among equals
		frontier.insert(5, 20);
		frontier.insert(3, 20);
		assert_eq!(frontier.peek_min(), Some(3));
	}

	#[test]
	fn reinsert_after_remove_is_new() {
		let mut frontier = Frontier::new();
		frontier.insert(0, 10);
		frontier.insert(1, 10);
		frontier.remove(0);
		frontier.insert(0, 10);
		assert_eq!(frontier.peek_min(), Some(1));
		assert_eq!(frontier.f(0), Some(10));
	}

	#[test]
	fn empty() {
		let mut frontier = Frontier::new();
		assert_eq!(frontier.peek_min(), None);
		frontier.insert(2, 2);
		assert!(frontier.remove(2));
		assert!(!frontier.remove(2));
		assert_eq!(frontier.peek_min(), None);
		assert!(frontier.is_empty());
	}

	#[test]
	fn visited() {
		let mut visited = VisitedSet::new();
		assert!(visited.insert(3));
		assert!(!visited.insert(3));
		assert!(visited.contains(3));
		assert!(!visited.contains(4));
		assert_eq!(visited.iter().collect::<Vec<_>>(), vec![3]);
		visited.clear();
		assert!(visited.is_empty());
	}
}
