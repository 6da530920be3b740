use crate::Cell;

use thiserror::Error;

/// The reasons a search cannot be started.
///
/// A search that runs and fails to find the goal is not an error, see
/// [`StepOutcome::Unreachable`](crate::StepOutcome::Unreachable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SearchError {
	/// No start Cell has been designated
	#[error("no start cell has been designated")]
	MissingStart,
	/// No goal Cell has been designated
	#[error("no goal cell has been designated")]
	MissingGoal,
}

/// Errors from parsing an [`AsciiMap`](crate::AsciiMap)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum MapError {
	/// A character that does not describe any Tile
	#[error("unknown tile {tile:?} at {cell}")]
	UnknownTile {
		/// the offending character
		tile: char,
		/// where it was found
		cell: Cell,
	},
	/// More than one start or goal
	#[error("{tile:?} appears more than once, again at {cell}")]
	Duplicate {
		/// either `'S'` or `'G'`
		tile: char,
		/// the position of the second occurrence
		cell: Cell,
	},
}
