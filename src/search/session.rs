use super::{NodeInfo, SearchStatus, Snapshot, StepOutcome};
use crate::cost::CostEvaluator;
use crate::frontier::{Frontier, VisitedSet};
use crate::graph::{NodeID, NodeStore, Score};
use crate::neighbors::MooreNeighborhood;
use crate::surface::Surface;
use crate::{Cell, ObstacleSet, Path};

/// The state of one search from `start` to `goal`
#[derive(Clone, Debug)]
pub(crate) struct Session {
	start: Cell,
	goal: Cell,
	store: NodeStore,
	frontier: Frontier,
	visited: VisitedSet,
	current: NodeID,
	path: Option<Path>,
	status: SearchStatus,
	steps: usize,
	neighbors: Vec<NodeID>,
}

impl Session {
	pub fn begin(start: Cell, goal: Cell, costs: &CostEvaluator) -> Session {
		let mut store = NodeStore::new();
		let current = store.get_or_create(start);
		let score = Score::new(0, costs.heuristic(start, goal));
		store[current].score = Some(score);

		let mut frontier = Frontier::new();
		frontier.insert(current, score.f);

		let mut session = Session {
			start,
			goal,
			store,
			frontier,
			visited: VisitedSet::new(),
			current,
			path: None,
			status: SearchStatus::Running,
			steps: 0,
			neighbors: Vec::with_capacity(8),
		};
		if let Some(path) = session.reconstruct(current) {
			session.path = Some(path);
			session.status = SearchStatus::Solved;
		}
		session
	}

	pub fn status(&self) -> SearchStatus {
		self.status
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_ref()
	}

	pub fn steps(&self) -> usize {
		self.steps
	}

	pub fn outcome(&self) -> StepOutcome {
		match (&self.status, &self.path) {
			(SearchStatus::Solved, Some(path)) => StepOutcome::Solved(path.clone()),
			(SearchStatus::Unreachable, _) => StepOutcome::Unreachable,
			_ => StepOutcome::Running,
		}
	}

	/// Performs one iteration of A*: expand `current`, finalize it and pick the next one.
	pub fn step<S: Surface + ?Sized>(
		&mut self,
		surface: &S,
		obstacles: &ObstacleSet,
		costs: &CostEvaluator,
	) -> StepOutcome {
		if self.status != SearchStatus::Running {
			return self.outcome();
		}
		if self.frontier.is_empty() {
			debug!(
				"{} is unreachable from {} after {} steps",
				self.goal, self.start, self.steps
			);
			self.status = SearchStatus::Unreachable;
			return StepOutcome::Unreachable;
		}

		let current = self.current;
		let current_pos = self.store[current].pos;
		let current_g = self.store[current].expect_score().g;

		let mut neighbors = std::mem::take(&mut self.neighbors);
		MooreNeighborhood::new().generate(
			current_pos,
			self.start,
			obstacles,
			surface,
			&mut self.store,
			&mut neighbors,
		);

		for &other_id in neighbors.iter() {
			let other_pos = self.store[other_id].pos;
			if !costs.is_diagonally_reachable(obstacles, current_pos, other_pos) {
				continue;
			}
			let cost = costs.step_cost(current_pos, other_pos);

			if self.frontier.contains(other_id) {
				if current_g + cost < self.store[other_id].expect_score().g {
					let score = costs.score(&mut self.store, current, other_id, cost, self.goal);
					self.frontier.insert(other_id, score.f);
				}
			} else if !self.visited.contains(other_id) {
				let score = costs.score(&mut self.store, current, other_id, cost, self.goal);
				self.frontier.insert(other_id, score.f);
			}
		}
		self.neighbors = neighbors;

		self.frontier.remove(current);
		self.visited.insert(current);
		if let Some(next) = self.frontier.peek_min() {
			self.current = next;
		}
		self.steps += 1;

		trace!(
			"step {}: expanded {}, next is {} ({} open, {} closed)",
			self.steps,
			current_pos,
			self.store[self.current].pos,
			self.frontier.len(),
			self.visited.len()
		);

		match self.reconstruct(self.current) {
			Some(path) => {
				debug!(
					"found a path from {} to {} after {} steps: {}",
					self.start, self.goal, self.steps, path
				);
				self.path = Some(path.clone());
				self.status = SearchStatus::Solved;
				StepOutcome::Solved(path)
			}
			None => StepOutcome::Running,
		}
	}

	/// Walks the parent links from `id` back to the start. `None` if `id` is not the goal.
	#[track_caller]
	pub fn reconstruct(&self, id: NodeID) -> Option<Path> {
		let goal = &self.store[id];
		if goal.pos != self.goal {
			return None;
		}

		let mut steps = vec![];
		let mut current = goal;
		while current.pos != self.start {
			assert!(
				steps.len() < self.store.len(),
				"cyclic parent chain through {}",
				current.pos
			);
			steps.push(current.pos);
			let parent = match current.parent {
				Some(parent) => parent,
				None => panic!("{} is not connected to the start", current.pos),
			};
			current = self.store.expect(parent);
		}
		steps.reverse();

		Some(Path::new(steps, goal.expect_score().g))
	}

	pub fn snapshot(&self) -> Snapshot {
		let info = |id: NodeID| NodeInfo::from(&self.store[id]);

		let mut frontier: Vec<NodeInfo> = self.frontier.iter().map(info).collect();
		frontier.sort_by_key(|node| node.pos);

		let mut visited: Vec<Cell> = self.visited.iter().map(|id| self.store[id].pos).collect();
		visited.sort();

		let mut nodes: Vec<NodeInfo> = self
			.store
			.iter()
			.map(|(_, node)| NodeInfo::from(node))
			.collect();
		nodes.sort_by_key(|node| node.pos);

		Snapshot {
			start: self.start,
			goal: self.goal,
			current: self.store[self.current].pos,
			status: self.status,
			steps: self.steps,
			frontier,
			visited,
			nodes,
			path: self.path.clone(),
		}
	}

	/// Every Cell that has a Node in this session
	pub fn touched(&self) -> Vec<Cell> {
		let mut touched: Vec<Cell> = self.store.iter().map(|(_, node)| node.pos).collect();
		touched.sort();
		touched
	}
}
