#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A resumable A* search on an unbounded, 8-connected Grid.
//!
//! ## Introduction
//! Most A* implementations are a single function call: hand in a start and a goal and get a
//! Path back. That is great for games, but useless if you want to *watch* the algorithm work,
//! since all of the interesting state (which Tiles are on the Frontier, which are finalized,
//! what their costs are) disappears the moment the function returns.
//!
//! This crate keeps that state alive in a [`Search`]. Every call to [`Search::step`] performs
//! exactly one iteration of the algorithm and hands control back to the caller, who can then
//! inspect a [`Snapshot`] of the Frontier, the Visited Set and the scores of every Node before
//! deciding to step again. [`Search::run`] keeps stepping until the search is either solved or
//! found to be unreachable. Both can be mixed freely on the same Search.
//!
//! Movement is allowed in all 8 directions. Orthogonal steps cost `10`, diagonal steps cost `14`,
//! and a diagonal step may never cut the corner of a blocked Tile.
//!
//! ## Examples
//! Running a search to completion:
//! ```
//! use incremental_astar::prelude::*;
//!
//! // S = start, G = goal, # = blocked, . = floor, ' ' = no Tile at all
//! let map = AsciiMap::from_rows([
//!     "S.#..",
//!     "..#..",
//!     "..#.G",
//!     ".....",
//! ])
//! .unwrap();
//!
//! let mut search = map.into_search(SearchConfig::OPTIMAL);
//!
//! let outcome = search.run().unwrap();
//! let path = outcome.path().unwrap();
//!
//! // the Path does not contain the start, but always ends at the goal
//! assert_eq!(path.iter().last(), Some(&Cell::new(4, 2)));
//! assert_eq!(path.cost(), 68);
//! ```
//!
//! ### Stepping
//! ```
//! # use incremental_astar::prelude::*;
//! # let map = AsciiMap::from_rows([
//! #     "S.#..",
//! #     "..#..",
//! #     "..#.G",
//! #     ".....",
//! # ])
//! # .unwrap();
//! let mut search = map.into_search(SearchConfig::OPTIMAL);
//!
//! assert_eq!(search.step().unwrap(), StepOutcome::Running);
//!
//! let snapshot = search.snapshot().unwrap();
//! assert_eq!(snapshot.visited, vec![Cell::new(0, 0)]);
//! assert_eq!(snapshot.frontier.len(), 3);
//!
//! // finish the search from wherever it currently is
//! assert!(search.run().unwrap().is_solved());
//! ```
//!
//! ### Editing the Grid
//! The Obstacle Set and the start/goal designation live outside of a search session. Changing
//! them between steps is allowed, but the usual way is to [`erase`](Search::erase) the current
//! session and start over:
//! ```
//! use incremental_astar::prelude::*;
//!
//! let mut search = Search::new(Rect::new(Cell::new(0, 0), 5, 5));
//!
//! search.paint(Cell::new(0, 0), Brush::Start);
//! search.paint(Cell::new(4, 4), Brush::Goal);
//!
//! let first = search.run().unwrap();
//! assert_eq!(first.path().unwrap().cost(), 56);
//!
//! search.erase();
//! search.paint(Cell::new(2, 2), Brush::Blocked);
//!
//! let second = search.run().unwrap();
//! assert!(second.path().unwrap().cost() > 56);
//! ```
//! Without both a start and a goal there is nothing to search for:
//! ```
//! # use incremental_astar::prelude::*;
//! let mut search = Search::new(Unbounded);
//! search.set_start(Cell::new(0, 0));
//!
//! assert_eq!(search.step(), Err(SearchError::MissingGoal));
//! ```

#[cfg(feature = "log")]
macro_rules! debug {
	($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

#[cfg(feature = "log")]
macro_rules! trace {
	($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

mod cell;
pub use self::cell::Cell;

mod config;
pub use self::config::SearchConfig;

pub mod cost;
pub use self::cost::{Cost, Heuristic};

mod error;
pub use self::error::{MapError, SearchError};

pub mod neighbors;

pub mod graph;

mod obstacles;
pub use self::obstacles::ObstacleSet;

pub mod frontier;

mod path;
pub use self::path::Path;

pub mod surface;

mod ascii_map;
pub use self::ascii_map::AsciiMap;

mod search;
pub use self::search::{
	Brush, Designation, EraseReport, NodeInfo, Search, SearchStatus, Snapshot, StepOutcome,
};

/// The most commonly used Types of this crate
pub mod prelude {
	pub use crate::surface::{Rect, Surface, Unbounded};
	pub use crate::{
		AsciiMap, Brush, Cell, Heuristic, ObstacleSet, Path, Search, SearchConfig, SearchError,
		SearchStatus, StepOutcome,
	};
}
