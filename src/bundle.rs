//! Groups every component needed to path across a grid so they can be
//! spawned onto an entity in one go
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The grid, its navmesh and a cache of calculated paths
#[derive(Bundle)]
pub struct NavMeshBundle {
	/// Source of truth for blocked cells
	occupancy_grid: OccupancyGrid,
	/// Size of the grid and of actors
	dimensions: NavMeshDimensions,
	/// Areas and portals built from the grid
	nav_mesh: NavMesh,
	/// Paths that have been requested
	path_cache: PathCache,
}

impl NavMeshBundle {
	/// Create a new instance of [NavMeshBundle] from a grid and the size of
	/// the actors that will move through it
	pub fn new(occupancy_grid: OccupancyGrid, actor_size: u32) -> Result<Self, NavMeshError> {
		let dimensions = NavMeshDimensions::from_grid(&occupancy_grid, actor_size)?;
		let nav_mesh = NavMesh::new(&occupancy_grid, &dimensions)?;
		Ok(NavMeshBundle {
			occupancy_grid,
			dimensions,
			nav_mesh,
			path_cache: PathCache::default(),
		})
	}
	/// Create a new instance of [NavMeshBundle] from rows of cell values
	/// where `0` is free and anything greater is blocked
	pub fn from_rows(rows: Vec<Vec<u8>>, actor_size: u32) -> Result<Self, NavMeshError> {
		NavMeshBundle::new(OccupancyGrid::new(rows)?, actor_size)
	}
	/// Create a new instance of [NavMeshBundle] where every cell is free
	pub fn new_open(width: u32, height: u32, actor_size: u32) -> Result<Self, NavMeshError> {
		NavMeshBundle::new(OccupancyGrid::new_open(width, height)?, actor_size)
	}
	/// Get a reference to the navmesh
	pub fn get_nav_mesh(&self) -> &NavMesh {
		&self.nav_mesh
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn new_bundle() {
		let bundle = NavMeshBundle::new_open(30, 30, 1).unwrap();
		assert_eq!(1, bundle.get_nav_mesh().get_graph().len());
		assert_eq!((30, 30), bundle.get_nav_mesh().get_dimensions().get_size());
	}
	#[test]
	fn bundle_from_rows() {
		let rows = vec![vec![0, 0, 1, 0], vec![0, 0, 1, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0]];
		let bundle = NavMeshBundle::from_rows(rows, 1).unwrap();
		let path = bundle
			.get_nav_mesh()
			.find_path(Vec2::new(0.5, 0.5), Vec2::new(3.5, 0.5));
		assert_eq!(Some(&Vec2::new(3.5, 0.5)), path.last());
	}
	#[test]
	fn invalid_actor_size() {
		assert_eq!(Some(NavMeshError::InvalidActorSize), NavMeshBundle::new_open(10, 10, 0).err());
	}
	#[test]
	fn ragged_rows() {
		let rows = vec![vec![0, 0], vec![0]];
		assert!(NavMeshBundle::from_rows(rows, 1).is_err());
	}
}
