use crate::{Cell, Cost};

/// The scores of a Node that has been reached by the search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
	/// the Cost of the best known Path from the start to this Node
	pub g: Cost,
	/// the estimated Cost from this Node to the goal
	pub h: Cost,
	/// `g + h`
	pub f: Cost,
}

impl Score {
	/// Creates a Score, deriving `f` from `g` and `h`
	pub fn new(g: Cost, h: Cost) -> Score {
		Score { g, h, f: g + h }
	}
}

/// The search state of a single Cell.
///
/// A Node is created the first time its Cell is looked at during a session. It stays unscored
/// until the search actually reaches it from a neighbor (or it is the start).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	/// the Cell of this Node
	pub pos: Cell,
	/// `None` until the Node has been scored
	pub score: Option<Score>,
	/// the Cell this Node was reached from. `None` for the start and unscored Nodes
	pub parent: Option<Cell>,
}

impl Node {
	/// Creates a new, unscored Node at `pos`
	pub fn new(pos: Cell) -> Node {
		Node {
			pos,
			score: None,
			parent: None,
		}
	}

	/// `true` once the Node has been scored
	pub fn is_scored(&self) -> bool {
		self.score.is_some()
	}

	/// Returns the Score of a Node that is known to be scored.
	///
	/// ## Panics
	/// if the Node was never scored
	#[track_caller]
	pub fn expect_score(&self) -> Score {
		match self.score {
			Some(score) => score,
			None => panic!("Node at {} has not been scored", self.pos),
		}
	}
}
