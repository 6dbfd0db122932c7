//! The occupancy grid is the source of truth for which cells of the world an
//! actor can stand in. Each cell holds a value where `0` is free and anything
//! greater is blocked.
//!
//! Cells are stored row-major, `rows[y][x]`, with `(0, 0)` in the top-left
//! corner:
//!
//! ```text
//!  x ->
//! y  _____________
//! | |_0_|_0_|_1_|
//! v |_0_|_0_|_1_|
//!   |_0_|_0_|_0_|
//! ```
//!
//! Reads outside of the grid are treated as free so that a decomposition
//! region hanging over the edge never reports a phantom blockage.

use bevy::prelude::*;

use crate::prelude::*;

/// Binary occupancy of the world, `0` is free and anything greater is blocked
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
	/// Rows of cells indexed by `[y][x]`
	rows: Vec<Vec<u8>>,
}

impl OccupancyGrid {
	/// Create a new instance of [OccupancyGrid] from rows of cell values. Every
	/// row must have the same, non-zero, length
	pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, NavMeshError> {
		let expected = match rows.first() {
			Some(first) if !first.is_empty() => first.len(),
			_ => return Err(NavMeshError::EmptyGrid),
		};
		if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
			return Err(NavMeshError::RaggedRow {
				row,
				expected,
				found: cells.len(),
			});
		}
		Ok(OccupancyGrid { rows })
	}
	/// Create a new instance of [OccupancyGrid] where every cell is free
	pub fn new_open(width: u32, height: u32) -> Result<Self, NavMeshError> {
		OccupancyGrid::new(vec![vec![0; width as usize]; height as usize])
	}
	/// Get a reference to the rows of the grid
	pub fn get_rows(&self) -> &[Vec<u8>] {
		&self.rows
	}
	/// Number of columns
	pub fn get_width(&self) -> u32 {
		self.rows.first().map_or(0, |r| r.len()) as u32
	}
	/// Number of rows
	pub fn get_height(&self) -> u32 {
		self.rows.len() as u32
	}
	/// Get the `(width, height)` of the grid
	pub fn get_dimensions(&self) -> (u32, u32) {
		(self.get_width(), self.get_height())
	}
	/// Get the value of a cell, `None` if it lies outside of the grid
	pub fn get_cell_value(&self, cell: UVec2) -> Option<u8> {
		self.rows
			.get(cell.y as usize)
			.and_then(|row| row.get(cell.x as usize))
			.copied()
	}
	/// Set the value of a cell
	pub fn set_cell_value(&mut self, cell: UVec2, value: u8) -> Result<(), NavMeshError> {
		let (width, height) = self.get_dimensions();
		match self
			.rows
			.get_mut(cell.y as usize)
			.and_then(|row| row.get_mut(cell.x as usize))
		{
			Some(v) => {
				*v = value;
				Ok(())
			}
			None => Err(NavMeshError::CellOutOfBounds {
				cell,
				width,
				height,
			}),
		}
	}
	/// Whether the cell at `(x, y)` is blocked. Cells outside of the grid are
	/// free
	pub fn is_blocked(&self, x: u32, y: u32) -> bool {
		self.get_cell_value(UVec2::new(x, y))
			.is_some_and(|value| value > 0)
	}
	/// Whether any cell within the half-open rectangle `[x, x + width) x [y, y
	/// + height)` is blocked
	pub fn has_block(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
		let row_end = (y.saturating_add(height) as usize).min(self.rows.len());
		let column_start = x as usize;
		let column_end = x.saturating_add(width) as usize;
		self.rows
			.iter()
			.take(row_end)
			.skip(y as usize)
			.any(|row| {
				let end = column_end.min(row.len());
				column_start < end && row[column_start..end].iter().any(|v| *v > 0)
			})
	}
}
