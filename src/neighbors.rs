//! The Neighborhood of a Cell

use crate::graph::{NodeID, NodeStore};
use crate::surface::Surface;
use crate::{Cell, ObstacleSet};

/// The 8 directions, in the order they are examined.
///
/// The order only matters for how ties on the Frontier are broken.
const OFFSETS: [(i32, i32); 8] = [
	(1, 1),
	(1, 0),
	(1, -1),
	(0, 1),
	(0, -1),
	(-1, 1),
	(-1, 0),
	(-1, -1),
];

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MooreNeighborhood;

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood
	pub fn new() -> MooreNeighborhood {
		MooreNeighborhood
	}

	/// Provides all Cells around `cell`, without looking at the Grid at all.
	///
	/// That is 8 Cells everywhere except for the edge of the `i32` plane.
	pub fn get_all_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
		OFFSETS
			.iter()
			.filter_map(move |&(dx, dy)| cell.checked_offset(dx, dy))
	}

	/// Collects the Nodes of all Cells around `center` that may be stepped on into `out`.
	///
	/// A Cell is skipped if it
	/// - is the `start` of the search. The start is only ever an origin.
	/// - is blocked
	/// - has no content on the `surface`
	///
	/// Everything else gets a Node in the `store`, creating one if necessary.
	///
	/// `out` is cleared first. Diagonal corner cutting is not checked here.
	pub fn generate<S: Surface + ?Sized>(
		&self,
		center: Cell,
		start: Cell,
		obstacles: &ObstacleSet,
		surface: &S,
		store: &mut NodeStore,
		out: &mut Vec<NodeID>,
	) {
		out.clear();
		let candidates = self.get_all_neighbors(center).filter(|&cell| {
			cell != start
				&& !obstacles.is_blocked(cell)
				&& surface.has_traversable_content(cell)
		});
		for cell in candidates {
			out.push(store.get_or_create(cell));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::surface::{Rect, Unbounded};

	fn positions(store: &NodeStore, ids: &[NodeID]) -> Vec<Cell> {
		ids.iter().map(|&id| store[id].pos).collect()
	}

	#[test]
	fn get_all_neighbors() {
		let neighbors = MooreNeighborhood::new()
			.get_all_neighbors(Cell::new(0, 0))
			.collect::<Vec<_>>();
		assert_eq!(neighbors.len(), 8);
		assert!(neighbors.iter().all(|&n| Cell::new(0, 0).is_adjacent(n)));
		assert_eq!(neighbors[0], Cell::new(1, 1));
		assert_eq!(neighbors[7], Cell::new(-1, -1));
	}

	#[test]
	fn edge_of_the_plane() {
		let neighborhood = MooreNeighborhood::new();
		let corner = Cell::new(i32::MAX, i32::MIN);
		assert_eq!(
			neighborhood.get_all_neighbors(corner).collect::<Vec<_>>(),
			vec![
				Cell::new(i32::MAX, i32::MIN + 1),
				Cell::new(i32::MAX - 1, i32::MIN + 1),
				Cell::new(i32::MAX - 1, i32::MIN),
			],
		);
	}

	#[test]
	fn generate_filters() {
		let mut store = NodeStore::new();
		let mut obstacles = ObstacleSet::new();
		obstacles.mark_blocked(Cell::new(1, 0));
		let mut out = vec![];

		// the start is at (0, 1), the Grid ends at x = -1
		MooreNeighborhood::new().generate(
			Cell::new(0, 0),
			Cell::new(0, 1),
			&obstacles,
			&Rect::new(Cell::new(0, -5), 10, 10),
			&mut store,
			&mut out,
		);

		assert_eq!(
			positions(&store, &out),
			vec![Cell::new(1, 1), Cell::new(1, -1), Cell::new(0, -1)],
		);
		assert_eq!(store.len(), 3);
	}

	#[test]
	fn generate_reuses_nodes() {
		let mut store = NodeStore::new();
		let obstacles = ObstacleSet::new();
		let neighborhood = MooreNeighborhood::new();
		let mut first = vec![];
		let mut second = vec![];

		let start = Cell::new(100, 100);
		neighborhood.generate(Cell::new(0, 0), start, &obstacles, &Unbounded, &mut store, &mut first);
		neighborhood.generate(Cell::new(1, 0), start, &obstacles, &Unbounded, &mut store, &mut second);

		// (1, 1) is a neighbor of both
		let shared = store.id_at(Cell::new(1, 1)).unwrap();
		assert!(first.contains(&shared));
		assert!(second.contains(&shared));
		// 8 around (0, 0), plus the 3 new ones on the right of (1, 0) and (0, 0) itself
		assert_eq!(store.len(), 12);
	}
}
