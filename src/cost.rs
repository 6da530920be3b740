//! Step costs, Heuristics and the rules for diagonal movement

use crate::graph::{NodeID, NodeStore, Score};
use crate::{Cell, ObstacleSet, SearchConfig};

/// a Type to represent the Cost of a Path
pub type Cost = usize;

/// The estimate of how expensive it is to reach the goal from a Cell.
///
/// All variants are scaled by [`SearchConfig::orthogonal_cost`].
///
/// ```
/// # use incremental_astar::{Cell, Heuristic};
/// let (a, b) = (Cell::new(0, 0), Cell::new(3, 1));
///
/// assert_eq!(Heuristic::Manhattan.estimate(a, b, 10, 14), 40);
/// assert_eq!(Heuristic::Octile.estimate(a, b, 10, 14), 34);
/// assert_eq!(Heuristic::Zero.estimate(a, b, 10, 14), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
	/// `|dx| + |dy|` orthogonal steps.
	///
	/// This ignores diagonal shortcuts and therefore overestimates the distance to any goal that
	/// is not in a straight line. The search still finds a Path, but it may not be the shortest.
	#[default]
	Manhattan,
	/// `max(|dx|, |dy|)` steps, of which `min(|dx|, |dy|)` are diagonal.
	///
	/// The exact distance on an empty Grid. Never overestimates, so the shortest Path is found.
	///
	/// With a `diagonal` cost below `orthogonal`, or above twice of it, the cheaper way of
	/// covering the distance is estimated instead, so this holds for any pair of costs.
	Octile,
	/// Always `0`. Turns the search into Dijkstra.
	Zero,
}

impl Heuristic {
	/// Estimates the Cost from `point` to `goal`
	pub fn estimate(self, point: Cell, goal: Cell, orthogonal: Cost, diagonal: Cost) -> Cost {
		let (dx, dy) = point.delta(goal);
		let (dx, dy) = (dx.unsigned_abs() as Cost, dy.unsigned_abs() as Cost);
		match self {
			Heuristic::Manhattan => orthogonal * (dx + dy),
			Heuristic::Octile => {
				let (long, short) = (dx.max(dy), dx.min(dy));
				// no step moves further than one Cell along the longer axis
				let straight = orthogonal.min(diagonal);
				let diagonal = diagonal.min(2 * orthogonal);
				straight * (long - short) + diagonal * short
			}
			Heuristic::Zero => 0,
		}
	}
}

/// Calculates the Cost of moving between adjacent Cells and keeps the scores of Nodes up to date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostEvaluator {
	orthogonal: Cost,
	diagonal: Cost,
	heuristic: Heuristic,
	prevent_corner_cutting: bool,
}

impl CostEvaluator {
	/// Creates a CostEvaluator using the costs and rules of `config`
	pub fn new(config: &SearchConfig) -> CostEvaluator {
		CostEvaluator {
			orthogonal: config.orthogonal_cost,
			diagonal: config.diagonal_cost,
			heuristic: config.heuristic,
			prevent_corner_cutting: config.prevent_corner_cutting,
		}
	}

	/// The Cost of a single step from `from` to the adjacent Cell `to`.
	///
	/// A step is orthogonal if exactly one of the two coordinates changes.
	pub fn step_cost(&self, from: Cell, to: Cell) -> Cost {
		debug_assert!(from.is_adjacent(to), "{} and {} are not adjacent", from, to);
		let (dx, dy) = from.delta(to);
		if dx == 0 || dy == 0 {
			self.orthogonal
		} else {
			self.diagonal
		}
	}

	/// The Heuristic estimate from `point` to `goal`
	pub fn heuristic(&self, point: Cell, goal: Cell) -> Cost {
		self.heuristic.estimate(point, goal, self.orthogonal, self.diagonal)
	}

	/// Checks that a step from `from` to `to` does not cut the corner of a blocked Cell.
	///
	/// The two corners are the Cell in the column of `to` and the row of `from`, and the Cell in
	/// the column of `from` and the row of `to`. For an orthogonal step these are simply `to`
	/// and `from` again.
	pub fn is_diagonally_reachable(&self, obstacles: &ObstacleSet, from: Cell, to: Cell) -> bool {
		if !self.prevent_corner_cutting {
			return true;
		}
		let first = Cell::new(to.x, from.y);
		let second = Cell::new(from.x, to.y);
		!obstacles.is_blocked(first) && !obstacles.is_blocked(second)
	}

	/// Makes `parent` the predecessor of `neighbour` and recalculates the score of `neighbour`.
	///
	/// Returns the new score.
	#[track_caller]
	pub fn score(
		&self,
		store: &mut NodeStore,
		parent: NodeID,
		neighbour: NodeID,
		cost: Cost,
		goal: Cell,
	) -> Score {
		let parent_node = &store[parent];
		let parent_pos = parent_node.pos;
		let g = parent_node.expect_score().g + cost;

		let node = &mut store[neighbour];
		let score = Score::new(g, self.heuristic(node.pos, goal));
		node.parent = Some(parent_pos);
		node.score = Some(score);
		score
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn evaluator() -> CostEvaluator {
		CostEvaluator::new(&SearchConfig::default())
	}

	#[test]
	fn step_costs() {
		let costs = evaluator();
		let center = Cell::new(4, -2);
		for dx in -1i32..=1 {
			for dy in -1..=1 {
				if dx == 0 && dy == 0 {
					continue;
				}
				// the parity of |dx - dy| distinguishes the two kinds of steps as well
				let expected = if (dx - dy).abs() % 2 == 1 { 10 } else { 14 };
				assert_eq!(costs.step_cost(center, center.offset(dx, dy)), expected);
			}
		}
	}

	#[test]
	fn manhattan_heuristic() {
		let costs = evaluator();
		assert_eq!(costs.heuristic(Cell::new(3, 1), Cell::new(0, 0)), 40);
		assert_eq!(costs.heuristic(Cell::new(-2, -2), Cell::new(1, 2)), 70);
	}

	#[test]
	fn manhattan_overestimates_diagonals() {
		let costs = evaluator();
		let (from, to) = (Cell::new(0, 0), Cell::new(1, 1));
		assert!(costs.heuristic(from, to) > costs.step_cost(from, to));

		let octile = CostEvaluator::new(&SearchConfig::OPTIMAL);
		assert_eq!(octile.heuristic(from, to), octile.step_cost(from, to));
	}

	#[test]
	fn octile_with_unusual_costs() {
		let (from, to) = (Cell::new(0, 0), Cell::new(3, 1));

		// cheap diagonals: zig-zagging costs 3 * 5
		let cheap = CostEvaluator::new(&SearchConfig {
			diagonal_cost: 5,
			heuristic: Heuristic::Octile,
			..Default::default()
		});
		assert_eq!(cheap.heuristic(from, to), 15);
		assert_eq!(cheap.heuristic(to, from), 15);

		// expensive diagonals: walking around the corner costs 4 * 10
		let expensive = CostEvaluator::new(&SearchConfig {
			diagonal_cost: 50,
			heuristic: Heuristic::Octile,
			..Default::default()
		});
		assert_eq!(expensive.heuristic(from, to), 40);
	}

	#[test]
	#[cfg(target_pointer_width = "64")]
	fn heuristic_across_the_plane() {
		let (from, to) = (Cell::new(i32::MIN, 0), Cell::new(i32::MAX, -1));
		let width = u32::MAX as Cost;
		assert_eq!(Heuristic::Octile.estimate(from, to, 1, 1), width);
		assert_eq!(Heuristic::Manhattan.estimate(to, from, 1, 1), width + 1);
	}

	#[test]
	fn corner_cutting() {
		let costs = evaluator();
		let mut obstacles = ObstacleSet::new();
		obstacles.mark_blocked(Cell::new(1, 0));

		let origin = Cell::new(0, 0);
		assert!(!costs.is_diagonally_reachable(&obstacles, origin, Cell::new(1, 1)));
		assert!(!costs.is_diagonally_reachable(&obstacles, origin, Cell::new(1, -1)));
		assert!(costs.is_diagonally_reachable(&obstacles, origin, Cell::new(-1, 1)));

		obstacles.unmark_blocked(Cell::new(1, 0));
		obstacles.mark_blocked(Cell::new(0, 1));
		assert!(!costs.is_diagonally_reachable(&obstacles, origin, Cell::new(1, 1)));
	}

	#[test]
	fn orthogonal_steps_are_never_blocked_by_corners() {
		let costs = evaluator();
		let mut obstacles = ObstacleSet::new();
		// surround the step (0, 0) -> (1, 0) with obstacles on both sides
		for x in -1..=2 {
			obstacles.mark_blocked(Cell::new(x, 1));
			obstacles.mark_blocked(Cell::new(x, -1));
		}
		assert!(costs.is_diagonally_reachable(&obstacles, Cell::new(0, 0), Cell::new(1, 0)));
		assert!(costs.is_diagonally_reachable(&obstacles, Cell::new(1, 0), Cell::new(0, 0)));
	}

	#[test]
	fn corner_cutting_can_be_allowed() {
		let costs = CostEvaluator::new(&SearchConfig {
			prevent_corner_cutting: false,
			..Default::default()
		});
		let obstacles: ObstacleSet = [Cell::new(1, 0), Cell::new(0, 1)].into_iter().collect();
		assert!(costs.is_diagonally_reachable(&obstacles, Cell::new(0, 0), Cell::new(1, 1)));
	}

	#[test]
	fn scoring() {
		let costs = evaluator();
		let goal = Cell::new(5, 5);
		let mut store = NodeStore::new();

		let start = store.get_or_create(Cell::new(0, 0));
		store[start].score = Some(Score::new(0, costs.heuristic(Cell::new(0, 0), goal)));

		let next = store.get_or_create(Cell::new(1, 1));
		let score = costs.score(&mut store, start, next, 14, goal);

		assert_eq!(score, Score { g: 14, h: 80, f: 94 });
		assert_eq!(store[next].parent, Some(Cell::new(0, 0)));
		assert_eq!(store[next].score, Some(score));
	}
}
