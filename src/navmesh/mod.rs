//! An occupancy grid is decomposed into free rectangular [Area]s which are
//! linked to their neighbours by portals. Searching that graph produces a
//! short list of waypoints an actor can follow.
//!
//! ```text
//!  _______________________________
//! |               |       |       |
//! |               |   B   |   C   |
//! |       A       x_______o_______|
//! |               |       |###|   |
//! |               |   D   |###|_E_|
//! |_______________|_______|___|___|
//! ```
//!
//! Here the grid has been split into Areas `A` to `E` around the blocked
//! cells `#`. An actor in `A` heading to `C` crosses the portal `x` into `B`
//! then `o` into `C`.
//!
//! The graph is built once from an [OccupancyGrid] and rebuilt whenever the
//! grid changes. Path requests only read it.
//!

pub mod area;
pub mod area_graph;
pub mod decompose;
pub mod error;
pub mod gateway;
pub mod grid;
pub mod path_cache;
pub mod reduce;
pub mod search;
pub mod utilities;

use bevy::{math::URect, prelude::*};

use crate::prelude::*;

/// The dimensions of the grid and the size of the actors moving through it
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavMeshDimensions {
	/// `(width, height)` of the grid in cells
	size: (u32, u32),
	/// Number of cells an actor needs to squeeze between two Areas. An Area
	/// border shorter than this cannot be crossed and a blocked region is not
	/// subdivided once its halves are smaller than this
	actor_size: u32,
}

impl NavMeshDimensions {
	/// Create a new instance of [NavMeshDimensions]
	pub fn new(width: u32, height: u32, actor_size: u32) -> Result<Self, NavMeshError> {
		if width == 0 || height == 0 {
			return Err(NavMeshError::EmptyGrid);
		}
		if actor_size == 0 {
			return Err(NavMeshError::InvalidActorSize);
		}
		if actor_size > width.min(height) {
			return Err(NavMeshError::ActorTooLarge {
				actor_size,
				width,
				height,
			});
		}
		Ok(NavMeshDimensions {
			size: (width, height),
			actor_size,
		})
	}
	/// Create a new instance of [NavMeshDimensions] sized to the `grid`
	pub fn from_grid(grid: &OccupancyGrid, actor_size: u32) -> Result<Self, NavMeshError> {
		let (width, height) = grid.get_dimensions();
		NavMeshDimensions::new(width, height, actor_size)
	}
	/// Get the `(width, height)` of the grid
	pub fn get_size(&self) -> (u32, u32) {
		self.size
	}
	/// Get the grid width
	pub fn get_width(&self) -> u32 {
		self.size.0
	}
	/// Get the grid height
	pub fn get_height(&self) -> u32 {
		self.size.1
	}
	/// Get the actor size
	pub fn get_actor_size(&self) -> u32 {
		self.actor_size
	}
	/// The region of the grid to decompose
	pub fn get_region(&self) -> URect {
		URect::new(0, 0, self.size.0, self.size.1)
	}
}

/// The built navigation graph of a grid
#[derive(Component, Clone, Debug, Default)]
pub struct NavMesh {
	/// Areas and portals of the grid
	graph: AreaGraph,
	/// Dimensions the graph was built with
	dimensions: NavMeshDimensions,
}

impl NavMesh {
	/// Create a new instance of [NavMesh] by decomposing and pointizing the
	/// `grid`
	pub fn new(grid: &OccupancyGrid, dimensions: &NavMeshDimensions) -> Result<Self, NavMeshError> {
		let mut nav_mesh = NavMesh {
			graph: AreaGraph::default(),
			dimensions: *dimensions,
		};
		nav_mesh.rebuild(grid, dimensions)?;
		Ok(nav_mesh)
	}
	/// Replace the graph with one built from the current state of the `grid`
	pub fn rebuild(
		&mut self,
		grid: &OccupancyGrid,
		dimensions: &NavMeshDimensions,
	) -> Result<(), NavMeshError> {
		if grid.get_dimensions() != dimensions.get_size() {
			return Err(NavMeshError::DimensionMismatch {
				grid: grid.get_dimensions(),
				dimensions: dimensions.get_size(),
			});
		}
		let actor_size = dimensions.get_actor_size();
		let areas = decompose(grid, dimensions.get_region(), actor_size);
		self.graph = AreaGraph::new(areas, actor_size);
		self.dimensions = *dimensions;
		debug!(
			"Built navmesh of {} areas and {} portals",
			self.graph.len(),
			self.graph.get_portal_count()
		);
		Ok(())
	}
	/// Get a reference to the graph of Areas
	pub fn get_graph(&self) -> &AreaGraph {
		&self.graph
	}
	/// Get the dimensions the graph was built with
	pub fn get_dimensions(&self) -> &NavMeshDimensions {
		&self.dimensions
	}
	/// Find the [Area] containing `point`
	pub fn get_area_containing(&self, point: Vec2) -> Option<&Area> {
		self.graph
			.get_area_containing(point)
			.and_then(|id| self.graph.get_area(id))
	}
	/// Find a list of waypoints from `start` to `finish`, empty when there is
	/// no route
	pub fn find_path(&self, start: Vec2, finish: Vec2) -> Vec<Vec2> {
		find_path(&self.graph, start, finish)
	}
}
