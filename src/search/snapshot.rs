use super::SearchStatus;
use crate::graph::{Node, Score};
use crate::{Cell, Path};

/// What is known about a single Node at the time of a [`Snapshot`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeInfo {
	/// the Cell of the Node
	pub pos: Cell,
	/// `g`, `h` and `f`, if the Node has been reached yet
	pub score: Option<Score>,
	/// the Cell the Node was reached from
	pub parent: Option<Cell>,
}

impl From<&Node> for NodeInfo {
	fn from(node: &Node) -> NodeInfo {
		NodeInfo {
			pos: node.pos,
			score: node.score,
			parent: node.parent,
		}
	}
}

/// The state of a search session between two steps.
///
/// This is everything a debug view needs to draw the search: which Cells are open or closed,
/// the scores of every Node and the Path, once found.
///
/// All lists are sorted by [`Cell`], so two Snapshots of equal searches compare equal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
	/// the start of the session
	pub start: Cell,
	/// the goal of the session
	pub goal: Cell,
	/// the Node that the next step expands
	pub current: Cell,
	/// how far the session has come
	pub status: SearchStatus,
	/// the number of steps performed so far
	pub steps: usize,
	/// the Open Set
	pub frontier: Vec<NodeInfo>,
	/// the Closed Set
	pub visited: Vec<Cell>,
	/// every Node created during the session, including the ones above
	pub nodes: Vec<NodeInfo>,
	/// the Path, once the session is solved
	pub path: Option<Path>,
}

impl Snapshot {
	/// The information about `cell`, if a Node exists for it
	pub fn node(&self, cell: Cell) -> Option<&NodeInfo> {
		self.nodes
			.binary_search_by_key(&cell, |node| node.pos)
			.ok()
			.map(|index| &self.nodes[index])
	}

	/// `true` if `cell` is on the Frontier
	pub fn is_open(&self, cell: Cell) -> bool {
		self.frontier
			.binary_search_by_key(&cell, |node| node.pos)
			.is_ok()
	}

	/// `true` if `cell` has been finalized
	pub fn is_closed(&self, cell: Cell) -> bool {
		self.visited.binary_search(&cell).is_ok()
	}
}

/// What [`Search::erase`](crate::Search::erase) cleaned up
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EraseReport {
	/// every Cell that had a Node in the erased session, sorted. This includes the Path.
	pub touched: Vec<Cell>,
	/// the designated start, which is kept
	pub start: Option<Cell>,
	/// the designated goal, which is kept
	pub goal: Option<Cell>,
}
