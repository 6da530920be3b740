use crate::{Cost, Heuristic};

/// Options for configuring a [`Search`](crate::Search)
///
/// Default options:
/// ```
/// # use incremental_astar::{Heuristic, SearchConfig};
/// assert_eq!(
///     SearchConfig {
///         orthogonal_cost: 10,
///         diagonal_cost: 14,
///         heuristic: Heuristic::Manhattan,
///         prevent_corner_cutting: true,
///         max_steps: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
	/// The Cost of stepping up, down, left or right (defaults to `10`).
	///
	/// This is also the scale of the [`Heuristic`].
	pub orthogonal_cost: Cost,
	/// The Cost of a diagonal step (defaults to `14`, which is roughly `10 * sqrt(2)`).
	pub diagonal_cost: Cost,
	/// The estimate used to guide the search towards the goal (defaults to
	/// [`Heuristic::Manhattan`]).
	///
	/// Note that only [`Heuristic::Octile`] and [`Heuristic::Zero`] guarantee the shortest Path
	/// when diagonal steps are allowed. See [`Heuristic`] for details.
	pub heuristic: Heuristic,
	/// `true` (default): a diagonal step is rejected if either of the two Cells it passes
	/// between is blocked.
	///
	/// `false`: diagonal steps only require the target Cell to be open.
	pub prevent_corner_cutting: bool,
	/// The maximum number of steps a single call to [`Search::run`](crate::Search::run) may
	/// perform before handing control back (defaults to `None`, meaning no limit).
	///
	/// On an [`Unbounded`](crate::surface::Unbounded) Surface an unreachable goal is never
	/// detected, since the Frontier never runs out. Set a limit in that case.
	pub max_steps: Option<usize>,
}

impl SearchConfig {
	/// a SearchConfig that always finds the shortest Path
	///
	/// Values:
	/// ```
	/// # use incremental_astar::{Heuristic, SearchConfig};
	/// assert_eq!(
	///     SearchConfig {
	///         orthogonal_cost: 10,
	///         diagonal_cost: 14,
	///         heuristic: Heuristic::Octile,
	///         prevent_corner_cutting: true,
	///         max_steps: None,
	///     },
	///     SearchConfig::OPTIMAL
	/// );
	/// ```
	pub const OPTIMAL: SearchConfig = SearchConfig {
		orthogonal_cost: 10,
		diagonal_cost: 14,
		heuristic: Heuristic::Octile,
		prevent_corner_cutting: true,
		max_steps: None,
	};
	/// a SearchConfig without any guidance towards the goal, turning the search into Dijkstra
	///
	/// Values:
	/// ```
	/// # use incremental_astar::{Heuristic, SearchConfig};
	/// assert_eq!(
	///     SearchConfig {
	///         orthogonal_cost: 10,
	///         diagonal_cost: 14,
	///         heuristic: Heuristic::Zero,
	///         prevent_corner_cutting: true,
	///         max_steps: None,
	///     },
	///     SearchConfig::DIJKSTRA
	/// );
	/// ```
	pub const DIJKSTRA: SearchConfig = SearchConfig {
		orthogonal_cost: 10,
		diagonal_cost: 14,
		heuristic: Heuristic::Zero,
		prevent_corner_cutting: true,
		max_steps: None,
	};

	/// Creates a default SearchConfig with a limit on the number of steps per run
	pub fn with_max_steps(max_steps: usize) -> SearchConfig {
		SearchConfig {
			max_steps: Some(max_steps),
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			orthogonal_cost: 10,
			diagonal_cost: 14,
			heuristic: Heuristic::Manhattan,
			prevent_corner_cutting: true,
			max_steps: None,
		}
	}
}
