//! Errors raised while validating the inputs used to build a
//! [NavMesh](crate::navmesh::NavMesh)
//!

use std::fmt;

use bevy::prelude::*;

/// Describes why an occupancy grid, the navmesh dimensions or a grid mutation
/// was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMeshError {
	/// The grid has no rows or no columns
	EmptyGrid,
	/// A row of the grid has a different number of cells to the first row
	RaggedRow {
		/// Index of the offending row
		row: usize,
		/// Number of cells found in the first row
		expected: usize,
		/// Number of cells found in the offending row
		found: usize,
	},
	/// An actor must occupy at least one cell
	InvalidActorSize,
	/// The actor cannot fit within the grid at all
	ActorTooLarge {
		/// Requested actor size
		actor_size: u32,
		/// Grid width
		width: u32,
		/// Grid height
		height: u32,
	},
	/// A cell lookup or update fell outside of the grid
	CellOutOfBounds {
		/// The requested cell
		cell: UVec2,
		/// Grid width
		width: u32,
		/// Grid height
		height: u32,
	},
	/// The grid used to (re)build a navmesh does not match the size it was
	/// configured with
	DimensionMismatch {
		/// `(width, height)` of the grid
		grid: (u32, u32),
		/// `(width, height)` held by the dimensions
		dimensions: (u32, u32),
	},
}

impl fmt::Display for NavMeshError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NavMeshError::EmptyGrid => write!(f, "occupancy grid must have at least one row and one column"),
			NavMeshError::RaggedRow {
				row,
				expected,
				found,
			} => write!(
				f,
				"occupancy grid row {} has {} cells, expected {}",
				row, found, expected
			),
			NavMeshError::InvalidActorSize => write!(f, "actor size must be at least 1 cell"),
			NavMeshError::ActorTooLarge {
				actor_size,
				width,
				height,
			} => write!(
				f,
				"actor size {} cannot fit within a grid of ({}, {})",
				actor_size, width, height
			),
			NavMeshError::CellOutOfBounds {
				cell,
				width,
				height,
			} => write!(
				f,
				"cell ({}, {}) is outside of a grid of ({}, {})",
				cell.x, cell.y, width, height
			),
			NavMeshError::DimensionMismatch { grid, dimensions } => write!(
				f,
				"grid of ({}, {}) does not match navmesh dimensions ({}, {})",
				grid.0, grid.1, dimensions.0, dimensions.1
			),
		}
	}
}

impl std::error::Error for NavMeshError {}
