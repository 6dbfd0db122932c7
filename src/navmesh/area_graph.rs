//! The [AreaGraph] is the arena of every [Area] found by decomposition. Once
//! pointized each Area carries a [Portal] per neighbour so that a search can
//! hop from crossing point to crossing point:
//!
//! ```text
//!  _______________
//! |       |       |
//! |   A   x   B   |   A holds a portal at x leading into B
//! |       o       |   B holds a portal at o leading into A
//! |_______|_______|
//! ```
//!
//! Adjacency is cyclic (A lists B and B lists A) so Areas refer to each other
//! by [AreaID] rather than by ownership.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::prelude::*;

/// Every free [Area] of a grid with the portals between them
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaGraph {
	/// Arena of Areas, an [AreaID] is an index into it
	areas: Vec<Area>,
}

impl AreaGraph {
	/// Create a new instance of [AreaGraph] by pointizing decomposed Areas
	pub fn new(areas: Vec<Area>, actor_size: u32) -> Self {
		pointize(areas, actor_size)
	}
	/// Get a reference to every [Area]
	pub fn get_areas(&self) -> &[Area] {
		&self.areas
	}
	/// Get an [Area] by its ID
	pub fn get_area(&self, id: AreaID) -> Option<&Area> {
		self.areas.get(id.get())
	}
	/// Number of Areas in the graph
	pub fn len(&self) -> usize {
		self.areas.len()
	}
	/// Whether the graph has no Areas, i.e the grid is fully blocked
	pub fn is_empty(&self) -> bool {
		self.areas.is_empty()
	}
	/// Total number of portals across all Areas
	pub fn get_portal_count(&self) -> usize {
		self.areas.iter().map(|a| a.get_portals().len()).sum()
	}
	/// Find the [Area] containing `point`
	pub fn get_area_containing(&self, point: Vec2) -> Option<AreaID> {
		self.areas
			.iter()
			.position(|a| a.contains(point))
			.map(AreaID::new)
	}
	/// Find the [Area] whose top-left or bottom-right corner is closest to
	/// `point`. The first Area wins a tie
	pub fn get_area_nearest(&self, point: Vec2) -> Option<AreaID> {
		let mut best: Option<(usize, f32)> = None;
		for (i, area) in self.areas.iter().enumerate() {
			let distance = area.corner_distance(point);
			match best {
				Some((_, d)) if d <= distance => {}
				_ => best = Some((i, distance)),
			}
		}
		best.map(|(i, _)| AreaID::new(i))
	}
}

/// Convert decomposed Areas into a point graph. For each Area and each of its
/// neighbours a [Portal] is computed marking where to cross into the
/// neighbour.
///
/// Neighbours are resolved through a lookup keyed by the origin of each Area
/// so every portal into the same Area shares the same [AreaID]. Areas never
/// overlap so an origin identifies exactly one of them
pub fn pointize(mut areas: Vec<Area>, actor_size: u32) -> AreaGraph {
	let mut by_origin: BTreeMap<(u32, u32), AreaID> = BTreeMap::new();
	for (i, area) in areas.iter().enumerate() {
		by_origin.entry((area.get_x(), area.get_y())).or_insert(AreaID::new(i));
	}
	for i in 0..areas.len() {
		let mut portals = Vec::with_capacity(areas[i].get_neighbours().len());
		for neighbour_id in areas[i].get_neighbours() {
			let Some(neighbour) = areas.get(neighbour_id.get()) else {
				warn!("Area {:?} lists a neighbour {:?} outside of the graph", i, neighbour_id);
				continue;
			};
			let Some(target) = by_origin.get(&(neighbour.get_x(), neighbour.get_y())) else {
				continue;
			};
			match compute_gateway(neighbour, &areas[i], actor_size) {
				Some(position) => portals.push(Portal::new(position, *target)),
				None => warn!(
					"Area {:?} and neighbour {:?} do not share a border",
					areas[i].get_origin(),
					neighbour.get_origin()
				),
			}
		}
		areas[i].set_portals(portals);
	}
	AreaGraph { areas }
}
