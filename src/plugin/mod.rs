//! Defines the Bevy [Plugin] for the area navmesh
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod grid_layer;
pub mod path_layer;

/// Ordering of the systems within a frame, grid changes are tidied up before
/// any paths are calculated so searches always read an up to date [NavMesh]
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	/// Apply grid changes, rebuild and purge stale paths
	Tidy,
	/// Calculate requested paths
	Calculate,
}

/// Registers the events and systems needed to keep a [NavMesh] in sync with
/// its [OccupancyGrid] and to answer [EventPathRequest]s
pub struct NavMeshPlugin;

impl Plugin for NavMeshPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.add_event::<EventUpdateOccupancyCell>()
			.add_event::<EventRebuildNavMesh>()
			.add_event::<EventPathRequest>()
			.configure_sets(Update, (OrderingSet::Tidy, OrderingSet::Calculate).chain())
			.add_systems(
				Update,
				(
					(
						grid_layer::process_occupancy_updates,
						grid_layer::rebuild_navmesh,
						path_layer::cleanup_old_paths,
					)
						.chain()
						.in_set(OrderingSet::Tidy),
					path_layer::process_path_requests.in_set(OrderingSet::Calculate),
				),
			);
	}
}
