//! Paths which have been calculated are stored in a [PathCache] so that
//! actors can poll for their route and repeated requests don't trigger a
//! fresh search
//!

use std::{collections::BTreeMap, time::Duration};

use bevy::prelude::*;

/// Describes the request a path was calculated for
#[derive(Clone, Copy, Debug)]
pub struct PathMetadata {
	/// Where the path starts
	source: Vec2,
	/// Where the path ends
	target: Vec2,
	//? If a game is running for 136 years bad things will start happening here
	/// Marks the path based on time elapsed since app start, used to enable automatic cleardown of long lived paths that are probably not needed anymore
	time_generated: Duration,
}

impl PathMetadata {
	/// Create a new instance of [PathMetadata]
	pub fn new(source: Vec2, target: Vec2, time_generated: Duration) -> Self {
		PathMetadata {
			source,
			target,
			time_generated,
		}
	}
	/// Get the start of the path
	pub fn get_source(&self) -> Vec2 {
		self.source
	}
	/// Get the end of the path
	pub fn get_target(&self) -> Vec2 {
		self.target
	}
	/// Get when the path was generated
	pub fn get_time_generated(&self) -> Duration {
		self.time_generated
	}
	/// Bit patterns of the coordinates, floats have no total equality so the
	/// request is compared on its exact representation
	fn key(&self) -> [u32; 4] {
		[
			self.source.x.to_bits(),
			self.source.y.to_bits(),
			self.target.x.to_bits(),
			self.target.y.to_bits(),
		]
	}
}

// we don't want to compare `time_generated` so manually impl PartialEq
impl PartialEq for PathMetadata {
	fn eq(&self, other: &Self) -> bool {
		self.key() == other.key()
	}
}

impl Eq for PathMetadata {}

impl Ord for PathMetadata {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.key().cmp(&other.key())
	}
}

impl PartialOrd for PathMetadata {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

/// Each key makes use of custom Ord and Eq implementations based on comparing
/// `(source, target)` so that [PathMetadata] can be used to look up the path
/// an actor has asked for regardless of when it was generated. An empty path
/// is stored for requests which have no route
#[derive(Component, Default, Clone, Debug)]
pub struct PathCache {
	/// Calculated waypoints of each request
	paths: BTreeMap<PathMetadata, Vec<Vec2>>,
}

impl PathCache {
	/// Get the map of paths
	pub fn get(&self) -> &BTreeMap<PathMetadata, Vec<Vec2>> {
		&self.paths
	}
	/// Get a mutable reference to the map of paths
	pub fn get_mut(&mut self) -> &mut BTreeMap<PathMetadata, Vec<Vec2>> {
		&mut self.paths
	}
	/// Get the waypoints from `source` to `target`. Returns [None] if the
	/// path has not been calculated
	pub fn get_path(&self, source: Vec2, target: Vec2) -> Option<&Vec<Vec2>> {
		let path = self
			.paths
			.get(&PathMetadata::new(source, target, Duration::default()));
		trace!("Path: {:?}", path);
		path
	}
	/// Whether a path from `source` to `target` has been calculated
	pub fn contains_path(&self, source: Vec2, target: Vec2) -> bool {
		self.paths
			.contains_key(&PathMetadata::new(source, target, Duration::default()))
	}
	/// Insert a path, replacing any existing one for the same request
	pub fn insert_path(
		&mut self,
		source: Vec2,
		target: Vec2,
		elapsed_duration: Duration,
		path: Vec<Vec2>,
	) {
		let metadata = PathMetadata::new(source, target, elapsed_duration);
		// a BTreeMap keeps the old key on insert, remove it so the new
		// generation time is recorded
		self.paths.remove(&metadata);
		self.paths.insert(metadata, path);
	}
	/// Remove a path
	pub fn remove_path(&mut self, metadata: PathMetadata) {
		self.paths.remove(&metadata);
	}
	/// Remove every path
	pub fn clear(&mut self) {
		self.paths.clear();
	}
	/// Number of stored paths
	pub fn len(&self) -> usize {
		self.paths.len()
	}
	/// Whether no paths are stored
	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}
	/// Remove paths generated more than `max_age` before `elapsed_duration`,
	/// returning how many were removed
	pub fn purge_older_than(&mut self, elapsed_duration: Duration, max_age: Duration) -> usize {
		let before = self.paths.len();
		self.paths.retain(|metadata, _| {
			elapsed_duration.saturating_sub(metadata.get_time_generated()) <= max_age
		});
		before - self.paths.len()
	}
}
