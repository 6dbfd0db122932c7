//! Logic relating to calculating paths across the [NavMesh]
//!

use std::time::Duration;

use crate::prelude::*;
use bevy::prelude::*;

/// A request to calculate a path from the source to the target. The result
/// is placed into the [PathCache] where it can be polled with
/// [PathCache::get_path]
#[derive(Event, Debug, Clone, Copy)]
pub struct EventPathRequest {
	/// Where the path starts
	source: Vec2,
	/// Where the path should end
	target: Vec2,
}

impl EventPathRequest {
	/// Create a new instance of [EventPathRequest]
	pub fn new(source: Vec2, target: Vec2) -> Self {
		EventPathRequest { source, target }
	}
	/// Get the start of the requested path
	pub fn get_source(&self) -> Vec2 {
		self.source
	}
	/// Get the end of the requested path
	pub fn get_target(&self) -> Vec2 {
		self.target
	}
}

/// Process [EventPathRequest]s, searching the [NavMesh] for any that haven't
/// already been calculated
pub fn process_path_requests(
	mut events: EventReader<EventPathRequest>,
	mut query: Query<(&NavMesh, &mut PathCache)>,
	time: Res<Time>,
) {
	for event in events.read() {
		for (nav_mesh, mut path_cache) in query.iter_mut() {
			// several actors may ask for the same path, only search once
			if path_cache.contains_path(event.get_source(), event.get_target()) {
				continue;
			}
			let path = nav_mesh.find_path(event.get_source(), event.get_target());
			if path.is_empty() {
				debug!(
					"No path from {} to {}",
					event.get_source(),
					event.get_target()
				);
			}
			path_cache.insert_path(event.get_source(), event.get_target(), time.elapsed(), path);
		}
	}
}

/// Purge any paths older than 15 minutes
pub fn cleanup_old_paths(mut query: Query<&mut PathCache>, time: Res<Time>) {
	let max_age = Duration::from_secs(PATH_EXPIRY_SECONDS);
	for mut path_cache in query.iter_mut() {
		let removed = path_cache.purge_older_than(time.elapsed(), max_age);
		if removed > 0 {
			trace!("Purged {} expired paths", removed);
		}
	}
}
