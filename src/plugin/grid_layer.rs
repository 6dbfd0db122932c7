//! Logic for handling changes to the [OccupancyGrid] which in turn rebuilds
//! the [NavMesh] and cleans the [PathCache] of paths which may of been made
//! invalid by the change
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Used to update a cell of the [OccupancyGrid]
#[derive(Event, Debug, Clone, Copy)]
pub struct EventUpdateOccupancyCell {
	/// Cell to update
	cell: UVec2,
	/// The value the cell should be assigned, `0` is free and anything greater
	/// is blocked
	value: u8,
}

impl EventUpdateOccupancyCell {
	/// Create a new instance of [EventUpdateOccupancyCell]
	pub fn new(cell: UVec2, value: u8) -> Self {
		EventUpdateOccupancyCell { cell, value }
	}
	/// Get the cell to update
	pub fn get_cell(&self) -> UVec2 {
		self.cell
	}
	/// Get the value to assign
	pub fn get_value(&self) -> u8 {
		self.value
	}
}

/// Emitted once in any frame where the [OccupancyGrid] has changed
#[derive(Event, Debug, Clone, Copy)]
pub struct EventRebuildNavMesh;

/// Read [EventUpdateOccupancyCell] and update the values within the
/// [OccupancyGrid]. Any number of updates in a frame produce a single
/// [EventRebuildNavMesh]
pub fn process_occupancy_updates(
	mut events: EventReader<EventUpdateOccupancyCell>,
	mut query: Query<&mut OccupancyGrid>,
	mut event_rebuild: EventWriter<EventRebuildNavMesh>,
) {
	let mut changed = false;
	for event in events.read() {
		for mut grid in query.iter_mut() {
			// ignore updates which wouldn't change anything
			if grid.get_cell_value(event.get_cell()) == Some(event.get_value()) {
				continue;
			}
			match grid.set_cell_value(event.get_cell(), event.get_value()) {
				Ok(()) => changed = true,
				Err(e) => error!("Ignoring occupancy update: {}", e),
			}
		}
	}
	if changed {
		event_rebuild.write(EventRebuildNavMesh);
	}
}

/// Rebuild each [NavMesh] from its [OccupancyGrid] and purge the [PathCache]
pub fn rebuild_navmesh(
	mut events: EventReader<EventRebuildNavMesh>,
	mut query: Query<(
		&mut NavMesh,
		&mut PathCache,
		&OccupancyGrid,
		&NavMeshDimensions,
	)>,
) {
	if events.is_empty() {
		return;
	}
	events.clear();
	for (mut nav_mesh, mut path_cache, grid, dimensions) in query.iter_mut() {
		match nav_mesh.rebuild(grid, dimensions) {
			Ok(()) => {
				// any cached path may cross the changed cells
				path_cache.clear();
			}
			Err(e) => error!("Failed to rebuild navmesh: {}", e),
		}
	}
}
