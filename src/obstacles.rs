use crate::Cell;

use hashbrown::HashSet;

/// The Cells that cannot be walked on.
///
/// The ObstacleSet is independent of any search session: it survives
/// [`Search::erase`](crate::Search::erase), and changes made between two steps take effect the
/// next time the neighbors of a Cell are generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleSet {
	blocked: HashSet<Cell>,
}

impl ObstacleSet {
	/// Creates an empty ObstacleSet
	pub fn new() -> ObstacleSet {
		ObstacleSet::default()
	}

	/// Marks `cell` as impassable. Returns `false` if it already was.
	pub fn mark_blocked(&mut self, cell: Cell) -> bool {
		self.blocked.insert(cell)
	}

	/// Makes `cell` passable again. Returns `false` if it wasn't blocked.
	pub fn unmark_blocked(&mut self, cell: Cell) -> bool {
		self.blocked.remove(&cell)
	}

	/// `true` if `cell` is impassable
	pub fn is_blocked(&self, cell: Cell) -> bool {
		self.blocked.contains(&cell)
	}

	/// The number of blocked Cells
	pub fn len(&self) -> usize {
		self.blocked.len()
	}

	/// `true` if no Cell is blocked
	pub fn is_empty(&self) -> bool {
		self.blocked.is_empty()
	}

	/// Iterates over the blocked Cells in no particular order
	pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
		self.blocked.iter().copied()
	}

	/// Unblocks every Cell
	pub fn clear(&mut self) {
		self.blocked.clear();
	}
}

impl FromIterator<Cell> for ObstacleSet {
	fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> ObstacleSet {
		ObstacleSet {
			blocked: iter.into_iter().collect(),
		}
	}
}

impl Extend<Cell> for ObstacleSet {
	fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
		self.blocked.extend(iter)
	}
}
