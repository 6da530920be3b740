use crate::surface::Surface;
use crate::{Cell, MapError, ObstacleSet, Search, SearchConfig};

use hashbrown::HashSet;
use std::str::FromStr;

/// A Grid described by text.
///
/// Every character is one Cell, with `x` counting columns and `y` counting rows from the top:
///
/// | Character | Meaning |
/// |-----------|---------|
/// | `.` | a walkable Tile |
/// | `#` | a blocked Tile |
/// | `S` | the start, on a walkable Tile |
/// | `G` | the goal, on a walkable Tile |
/// | ` ` | no Tile at all |
///
/// ```
/// # use incremental_astar::{AsciiMap, Cell, surface::Surface};
/// let map: AsciiMap = "S.#\n ..G".parse().unwrap();
///
/// assert_eq!(map.start(), Some(Cell::new(0, 0)));
/// assert_eq!(map.goal(), Some(Cell::new(3, 1)));
/// assert!(map.obstacles().is_blocked(Cell::new(2, 0)));
/// // blocked Tiles are still Tiles, empty Cells are not
/// assert!(map.has_traversable_content(Cell::new(2, 0)));
/// assert!(!map.has_traversable_content(Cell::new(0, 1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiMap {
	tiles: HashSet<Cell>,
	obstacles: ObstacleSet,
	start: Option<Cell>,
	goal: Option<Cell>,
}

impl AsciiMap {
	/// Parses a map given line by line
	pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a str>) -> Result<AsciiMap, MapError> {
		let mut map = AsciiMap::default();
		for (y, row) in rows.into_iter().enumerate() {
			for (x, tile) in row.chars().enumerate() {
				let cell = Cell::new(x as i32, y as i32);
				match tile {
					' ' => continue,
					'.' => {}
					'#' => {
						map.obstacles.mark_blocked(cell);
					}
					'S' => {
						if map.start.replace(cell).is_some() {
							return Err(MapError::Duplicate { tile, cell });
						}
					}
					'G' => {
						if map.goal.replace(cell).is_some() {
							return Err(MapError::Duplicate { tile, cell });
						}
					}
					_ => return Err(MapError::UnknownTile { tile, cell }),
				}
				map.tiles.insert(cell);
			}
		}
		Ok(map)
	}

	/// The start, if the map contains an `S`
	pub fn start(&self) -> Option<Cell> {
		self.start
	}

	/// The goal, if the map contains a `G`
	pub fn goal(&self) -> Option<Cell> {
		self.goal
	}

	/// The blocked Tiles
	pub fn obstacles(&self) -> &ObstacleSet {
		&self.obstacles
	}

	/// The number of Tiles, blocked or not
	pub fn tile_count(&self) -> usize {
		self.tiles.len()
	}

	/// Creates a [`Search`] on this map with its obstacles, start and goal already set up
	pub fn into_search(self, config: SearchConfig) -> Search<AsciiMap> {
		let obstacles = self.obstacles.clone();
		let (start, goal) = (self.start, self.goal);

		let mut search = Search::with_config(self, config);
		*search.obstacles_mut() = obstacles;
		if let Some(start) = start {
			search.set_start(start);
		}
		if let Some(goal) = goal {
			search.set_goal(goal);
		}
		search
	}
}

impl FromStr for AsciiMap {
	type Err = MapError;
	fn from_str(text: &str) -> Result<AsciiMap, MapError> {
		AsciiMap::from_rows(text.lines())
	}
}

impl Surface for AsciiMap {
	fn has_traversable_content(&self, cell: Cell) -> bool {
		self.tiles.contains(&cell)
	}
}
