use crate::cost::CostEvaluator;
use crate::surface::Surface;
use crate::{Cell, ObstacleSet, Path, SearchConfig, SearchError};

mod session;
use self::session::Session;

mod snapshot;
pub use self::snapshot::{EraseReport, NodeInfo, Snapshot};

/// The lifecycle of a [`Search`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
	/// No session is active
	Idle,
	/// A session is active and has not found the goal yet
	Running,
	/// The session found a Path to the goal
	Solved,
	/// The session ran out of Nodes to expand without reaching the goal
	Unreachable,
}

/// The result of a call to [`Search::step`] or [`Search::run`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
	/// The goal has not been reached yet, step again to continue
	Running,
	/// The Path from the start to the goal
	Solved(Path),
	/// Every reachable Cell has been visited without finding the goal
	Unreachable,
}

impl StepOutcome {
	/// `true` if a Path was found
	pub fn is_solved(&self) -> bool {
		matches!(self, StepOutcome::Solved(_))
	}

	/// `true` if the search is over, either way
	pub fn is_finished(&self) -> bool {
		!matches!(self, StepOutcome::Running)
	}

	/// The Path, if one was found
	pub fn path(&self) -> Option<&Path> {
		match self {
			StepOutcome::Solved(path) => Some(path),
			_ => None,
		}
	}
}

/// The designated start and goal Cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Designation {
	/// the Cell the search starts from
	pub start: Option<Cell>,
	/// the Cell the search looks for
	pub goal: Option<Cell>,
}

impl Designation {
	/// `true` if both the start and the goal are designated
	pub fn is_complete(&self) -> bool {
		self.start.is_some() && self.goal.is_some()
	}
}

/// The different kinds of Tiles that can be painted onto the Grid with [`Search::paint`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Brush {
	/// Designate the start
	Start,
	/// Designate the goal
	Goal,
	/// Block the Cell
	Blocked,
	/// Make the Cell a normal, walkable Tile
	Standard,
}

/// A resumable A* search.
///
/// A Search holds the configuration that outlives a single search (the [`Surface`], the
/// [`ObstacleSet`] and the start/goal [`Designation`]) and at most one active session.
///
/// A session is created by the first call to [`step`](Search::step) or [`run`](Search::run)
/// (or explicitly by [`begin_session`](Search::begin_session)) and lasts until
/// [`erase`](Search::erase). The session copies the start and goal when it begins, so changing
/// the designation only affects the next session. Changes to the ObstacleSet take effect on the
/// next step.
#[derive(Clone, Debug)]
pub struct Search<S> {
	surface: S,
	obstacles: ObstacleSet,
	designation: Designation,
	config: SearchConfig,
	costs: CostEvaluator,
	session: Option<Session>,
}

impl<S: Surface> Search<S> {
	/// Creates a new Search with the default [`SearchConfig`]
	pub fn new(surface: S) -> Search<S> {
		Search::with_config(surface, SearchConfig::default())
	}

	/// Creates a new Search
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// use incremental_astar::prelude::*;
	///
	/// let mut search = Search::with_config(Unbounded, SearchConfig::OPTIMAL);
	/// search.set_start(Cell::new(0, 0));
	/// search.set_goal(Cell::new(3, -2));
	///
	/// let outcome = search.run().unwrap();
	/// assert_eq!(outcome.path().unwrap().cost(), 38);
	/// ```
	pub fn with_config(surface: S, config: SearchConfig) -> Search<S> {
		Search {
			surface,
			obstacles: ObstacleSet::new(),
			designation: Designation::default(),
			costs: CostEvaluator::new(&config),
			config,
			session: None,
		}
	}

	/// The configuration this Search was created with
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// The Surface this Search walks on
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Mutable access to the Surface. Changes take effect on the next step.
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	/// The blocked Cells
	pub fn obstacles(&self) -> &ObstacleSet {
		&self.obstacles
	}

	/// Mutable access to the blocked Cells. Changes take effect on the next step.
	pub fn obstacles_mut(&mut self) -> &mut ObstacleSet {
		&mut self.obstacles
	}

	/// The currently designated start and goal
	pub fn designation(&self) -> Designation {
		self.designation
	}

	/// Designates `cell` as the start of the next session
	pub fn set_start(&mut self, cell: Cell) -> Designation {
		self.designation.start = Some(cell);
		self.designation
	}

	/// Removes the start designation
	pub fn clear_start(&mut self) -> Designation {
		self.designation.start = None;
		self.designation
	}

	/// Designates `cell` as the goal of the next session
	pub fn set_goal(&mut self, cell: Cell) -> Designation {
		self.designation.goal = Some(cell);
		self.designation
	}

	/// Removes the goal designation
	pub fn clear_goal(&mut self) -> Designation {
		self.designation.goal = None;
		self.designation
	}

	/// Paints a single Tile, the way a Tile editor would.
	///
	/// Painting over the designated start or goal removes that designation first. Painting
	/// [`Brush::Start`] or [`Brush::Goal`] also unblocks the Cell, since it is replaced by a
	/// walkable Tile.
	///
	/// ```
	/// # use incremental_astar::prelude::*;
	/// let mut search = Search::new(Unbounded);
	/// search.paint(Cell::new(0, 0), Brush::Start);
	/// search.paint(Cell::new(5, 0), Brush::Goal);
	///
	/// // painting a wall over the goal removes it
	/// let designation = search.paint(Cell::new(5, 0), Brush::Blocked);
	/// assert_eq!(designation.goal, None);
	/// assert!(search.obstacles().is_blocked(Cell::new(5, 0)));
	/// ```
	pub fn paint(&mut self, cell: Cell, brush: Brush) -> Designation {
		if self.designation.start == Some(cell) {
			self.designation.start = None;
		} else if self.designation.goal == Some(cell) {
			self.designation.goal = None;
		}
		match brush {
			Brush::Start => {
				self.obstacles.unmark_blocked(cell);
				self.designation.start = Some(cell);
			}
			Brush::Goal => {
				self.obstacles.unmark_blocked(cell);
				self.designation.goal = Some(cell);
			}
			Brush::Blocked => {
				self.obstacles.mark_blocked(cell);
			}
			Brush::Standard => {
				self.obstacles.unmark_blocked(cell);
			}
		}
		self.designation
	}

	/// The state of the current session
	pub fn status(&self) -> SearchStatus {
		self.session
			.as_ref()
			.map_or(SearchStatus::Idle, Session::status)
	}

	/// The Path of the current session, if it has been solved
	pub fn path(&self) -> Option<&Path> {
		self.session.as_ref().and_then(Session::path)
	}

	/// Starts a new session from the designated start to the designated goal.
	///
	/// Any active session is replaced.
	pub fn begin_session(&mut self) -> Result<(), SearchError> {
		let start = self.designation.start.ok_or(SearchError::MissingStart)?;
		let goal = self.designation.goal.ok_or(SearchError::MissingGoal)?;

		debug!("beginning a search from {} to {}", start, goal);
		self.session = Some(Session::begin(start, goal, &self.costs));
		Ok(())
	}

	/// Performs a single iteration of the search, starting a session if necessary.
	///
	/// Once the session is solved or unreachable, further calls return the same outcome
	/// without doing any work.
	pub fn step(&mut self) -> Result<StepOutcome, SearchError> {
		let (session, surface, obstacles, costs) = self.active_session()?;
		Ok(session.step(surface, obstacles, costs))
	}

	/// Steps until the goal is found or turns out to be unreachable, starting a session if
	/// necessary.
	///
	/// If [`SearchConfig::max_steps`] is set, at most that many steps are performed, and
	/// [`StepOutcome::Running`] is returned if the search is not done by then.
	pub fn run(&mut self) -> Result<StepOutcome, SearchError> {
		let max_steps = self.config.max_steps;
		let (session, surface, obstacles, costs) = self.active_session()?;

		let mut steps = 0;
		loop {
			if max_steps.is_some_and(|max| steps >= max) {
				debug!("stopping the run after {} steps", steps);
				return Ok(StepOutcome::Running);
			}
			let outcome = session.step(surface, obstacles, costs);
			if outcome.is_finished() {
				return Ok(outcome);
			}
			steps += 1;
		}
	}

	/// The state of the current session. `None` if there is no session.
	pub fn snapshot(&self) -> Option<Snapshot> {
		self.session.as_ref().map(Session::snapshot)
	}

	/// Ends the current session, dropping all of its Nodes.
	///
	/// The ObstacleSet and the designation are kept, so the next step starts over with the same
	/// configuration. Returns the Cells the session touched.
	pub fn erase(&mut self) -> EraseReport {
		let touched = match self.session.take() {
			Some(session) => {
				debug!("erasing a search after {} steps", session.steps());
				session.touched()
			}
			None => vec![],
		};
		EraseReport {
			touched,
			start: self.designation.start,
			goal: self.designation.goal,
		}
	}

	/// The current session, created if necessary, next to everything a step needs
	#[allow(clippy::type_complexity)]
	fn active_session(
		&mut self,
	) -> Result<(&mut Session, &S, &ObstacleSet, &CostEvaluator), SearchError> {
		if self.session.is_none() {
			self.begin_session()?;
		}
		let Search {
			surface,
			obstacles,
			costs,
			session,
			..
		} = self;
		match session {
			Some(session) => Ok((session, &*surface, &*obstacles, &*costs)),
			None => unreachable!("begin_session always creates a session"),
		}
	}
}
