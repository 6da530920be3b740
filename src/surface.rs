//! The Grid a search walks on.
//!
//! The search never stores the Grid itself. Instead it asks a [`Surface`] whether a Cell has
//! anything on it that can be walked across. A Cell without content is treated exactly like a
//! blocked one, except that it does not prevent diagonal steps past it.

use crate::Cell;

use hashbrown::HashSet;

/// Tells the search which Cells exist.
///
/// The most common implementations are already provided by this Module:
/// - [`Unbounded`] for an infinite, empty plane
/// - [`Rect`] for a rectangular Grid
/// - [`FromFn`] (created with [`from_fn`]) to ask any closure
///
/// [`AsciiMap`](crate::AsciiMap) and `HashSet<Cell>` implement it as well.
pub trait Surface {
	/// `true` if there is a Tile at `cell` that can be walked on.
	///
	/// Note that it is not necessary to check the [`ObstacleSet`](crate::ObstacleSet) here.
	/// That check is done separately.
	fn has_traversable_content(&self, cell: Cell) -> bool;
}

impl<S: Surface + ?Sized> Surface for &S {
	fn has_traversable_content(&self, cell: Cell) -> bool {
		(**self).has_traversable_content(cell)
	}
}

impl Surface for HashSet<Cell> {
	fn has_traversable_content(&self, cell: Cell) -> bool {
		self.contains(&cell)
	}
}

/// A Surface where every Cell exists.
///
/// Keep in mind that a search on an unbounded Surface can only ever end by reaching the goal.
/// If the goal is walled in, the Frontier grows forever. Use
/// [`SearchConfig::max_steps`](crate::SearchConfig::max_steps) to stay in control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbounded;

impl Surface for Unbounded {
	fn has_traversable_content(&self, _: Cell) -> bool {
		true
	}
}

/// A rectangular Surface.
///
/// ```
/// # use incremental_astar::{Cell, surface::{Rect, Surface}};
/// let rect = Rect::new(Cell::new(-1, 0), 3, 2);
///
/// assert!(rect.has_traversable_content(Cell::new(-1, 0)));
/// assert!(rect.has_traversable_content(Cell::new(1, 1)));
/// assert!(!rect.has_traversable_content(Cell::new(2, 1)));
/// assert!(!rect.has_traversable_content(Cell::new(0, -1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
	min: Cell,
	width: u32,
	height: u32,
}

impl Rect {
	/// Creates a new Rect.
	///
	/// `min` is the top left Cell, `width` and `height` are the size of the Grid.
	pub fn new(min: Cell, width: u32, height: u32) -> Rect {
		Rect { min, width, height }
	}

	/// The size of the Rect as `(width, height)`
	pub fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	/// `true` if `cell` lies inside of the Rect
	pub fn contains(&self, cell: Cell) -> bool {
		let (dx, dy) = self.min.delta(cell);
		dx >= 0 && dy >= 0 && dx < self.width as i64 && dy < self.height as i64
	}

	/// Iterates over all Cells of the Rect, row by row
	pub fn cells(&self) -> impl Iterator<Item = Cell> {
		let (min, width, height) = (self.min, self.width as i32, self.height as i32);
		(0..height).flat_map(move |dy| (0..width).map(move |dx| min.offset(dx, dy)))
	}
}

impl Surface for Rect {
	fn has_traversable_content(&self, cell: Cell) -> bool {
		self.contains(cell)
	}
}

/// A Surface that asks a closure. Created by [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(F);

/// Creates a Surface from a closure.
///
/// ```
/// # use incremental_astar::{Cell, surface::{self, Surface}};
/// // a ring of Tiles around the origin
/// let ring = surface::from_fn(|cell: Cell| {
///     let radius = cell.x.abs().max(cell.y.abs());
///     (2..=3).contains(&radius)
/// });
///
/// assert!(ring.has_traversable_content(Cell::new(3, -1)));
/// assert!(!ring.has_traversable_content(Cell::new(0, 0)));
/// ```
pub fn from_fn<F: Fn(Cell) -> bool>(f: F) -> FromFn<F> {
	FromFn(f)
}

impl<F: Fn(Cell) -> bool> Surface for FromFn<F> {
	fn has_traversable_content(&self, cell: Cell) -> bool {
		(self.0)(cell)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rect_cells() {
		let rect = Rect::new(Cell::new(2, 2), 2, 2);
		assert_eq!(
			rect.cells().collect::<Vec<_>>(),
			vec![Cell::new(2, 2), Cell::new(3, 2), Cell::new(2, 3), Cell::new(3, 3)],
		);
		assert!(rect.cells().all(|cell| rect.contains(cell)));
	}

	#[test]
	fn cell_set() {
		let tiles: HashSet<Cell> = [Cell::new(0, 0), Cell::new(4, 4)].into_iter().collect();
		assert!(tiles.has_traversable_content(Cell::new(4, 4)));
		assert!(!tiles.has_traversable_content(Cell::new(1, 1)));

		fn by_value<S: Surface>(surface: S, cell: Cell) -> bool {
			surface.has_traversable_content(cell)
		}
		assert!(by_value(&tiles, Cell::new(0, 0)));
	}
}
