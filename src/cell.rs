use std::fmt;

/// A Position on the Grid.
///
/// The Grid has no bounds of its own, so both coordinates may be negative. Whether or not a Cell
/// can actually be walked on is decided by the [`Surface`](crate::surface::Surface) and the
/// [`ObstacleSet`](crate::ObstacleSet).
///
/// Cells are ordered by `x` first and `y` second. This order carries no meaning for the search,
/// it only exists to make the output of a [`Snapshot`](crate::Snapshot) deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
	/// the horizontal coordinate
	pub x: i32,
	/// the vertical coordinate
	pub y: i32,
}

impl Cell {
	/// Creates a new Cell at `(x, y)`
	pub const fn new(x: i32, y: i32) -> Cell {
		Cell { x, y }
	}

	/// The Cell that is `(dx, dy)` away from this one.
	///
	/// Panics in debug builds if the result is off the `i32` plane, see [`Cell::checked_offset`].
	pub const fn offset(self, dx: i32, dy: i32) -> Cell {
		Cell::new(self.x + dx, self.y + dy)
	}

	/// The Cell that is `(dx, dy)` away from this one, or `None` if it is off the `i32` plane
	pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Cell> {
		Some(Cell::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
	}

	/// The difference `other - self` per axis.
	///
	/// Widened to `i64`, so the two most distant Cells of the plane still have a difference.
	pub const fn delta(self, other: Cell) -> (i64, i64) {
		(other.x as i64 - self.x as i64, other.y as i64 - self.y as i64)
	}

	/// `true` if `other` is one of the 8 Cells surrounding this one
	pub fn is_adjacent(self, other: Cell) -> bool {
		let (dx, dy) = self.delta(other);
		self != other && dx.abs() <= 1 && dy.abs() <= 1
	}
}

impl From<(i32, i32)> for Cell {
	fn from((x, y): (i32, i32)) -> Cell {
		Cell::new(x, y)
	}
}

impl From<Cell> for (i32, i32) {
	fn from(cell: Cell) -> (i32, i32) {
		(cell.x, cell.y)
	}
}

impl fmt::Display for Cell {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "({}, {})", self.x, self.y)
	}
}
