use crate::{Cell, Cost};

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc as Arc;

/// A Path found by a [`Search`](crate::Search).
///
/// The Path does **not** contain the start Cell. It lists every Cell that has to be stepped on,
/// ending with the goal. A search whose start is also its goal produces an empty Path.
///
/// Cloning a Path is cheap, since the Cells are shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
	steps: Arc<[Cell]>,
	cost: Cost,
}

impl Path {
	/// Creates a Path from the Cells after the start and the total Cost of walking them
	pub fn new(steps: Vec<Cell>, cost: Cost) -> Path {
		Path {
			steps: steps.into(),
			cost,
		}
	}

	/// The total Cost of walking the Path. Equal to `g` of the goal.
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of steps in the Path
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// `true` if no steps are required, meaning the start is the goal
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// The last Cell of the Path, if it has any steps
	pub fn goal(&self) -> Option<Cell> {
		self.steps.last().copied()
	}

	/// Returns an Iterator over the Path
	pub fn iter(&self) -> std::slice::Iter<Cell> {
		self.steps.iter()
	}

	/// The Cells of the Path as a slice
	pub fn as_slice(&self) -> &[Cell] {
		&self.steps
	}
}

use std::ops::Index;

impl Index<usize> for Path {
	type Output = Cell;
	fn index(&self, index: usize) -> &Cell {
		&self.steps[index]
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Cell;
	type IntoIter = std::slice::Iter<'a, Cell>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl PartialEq<Vec<Cell>> for Path {
	fn eq(&self, rhs: &Vec<Cell>) -> bool {
		*self.steps == **rhs
	}
}

impl<'a> PartialEq<&'a [Cell]> for Path {
	fn eq(&self, rhs: &&'a [Cell]) -> bool {
		*self.steps == **rhs
	}
}

use std::fmt;
impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.steps.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.steps[0])?;
			for p in self.steps.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}
