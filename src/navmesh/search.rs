//! A* across the portals of an [AreaGraph].
//!
//! The search begins from a synthetic node at the exact start position and
//! expands by stepping onto every portal of the [Area] the current node sits
//! in. Movement cost and the heuristic are both the straight line distance,
//! so the first node popped from the frontier that lies within the finish
//! Area ends the cheapest route:
//!
//! ```text
//!  _______________
//! |  s    |       |
//! |   \   |       |   s = start, f = finish
//! |    \__x___    |   x, y = portals crossed
//! |_______|___\___|
//! |       |    \  |
//! |       |     y |
//! |_______|______f|
//! ```
//!

use std::{
	cmp::Ordering,
	collections::{BinaryHeap, HashMap, HashSet},
};

use bevy::prelude::*;

use crate::prelude::*;

/// A position visited during a search, nodes refer back to the node they
/// were reached from by index so the route can be backtracked
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Place {
	/// Where the node sits
	position: Vec2,
	/// The [Area] the node has entered
	area: AreaID,
	/// Distance travelled from the start to reach the node
	running_cost: f32,
	/// `running_cost` plus the straight line distance to the finish
	cost: f32,
	/// Index of the predecessor node, `None` for the start
	from: Option<usize>,
}

impl Place {
	/// Create a new instance of [Place]
	pub(crate) fn new(
		position: Vec2,
		area: AreaID,
		running_cost: f32,
		cost: f32,
		from: Option<usize>,
	) -> Self {
		Place {
			position,
			area,
			running_cost,
			cost,
			from,
		}
	}
	/// Get the position of the node
	pub fn get_position(&self) -> Vec2 {
		self.position
	}
	/// Get the [AreaID] the node is within
	pub fn get_area(&self) -> AreaID {
		self.area
	}
	/// Get the distance travelled to reach the node
	pub fn get_running_cost(&self) -> f32 {
		self.running_cost
	}
	/// Get the estimated total cost of a route through the node
	pub fn get_cost(&self) -> f32 {
		self.cost
	}
	/// Get the index of the predecessor node
	pub fn get_from(&self) -> Option<usize> {
		self.from
	}
}

/// Entry of the frontier, ordered so the [BinaryHeap] pops the cheapest node
/// first and, among equals, the one discovered earliest
#[derive(Debug)]
struct Frontier {
	/// Estimated total cost of the node
	cost: f32,
	/// Order of discovery
	sequence: usize,
	/// Index of the node
	node: usize,
}

impl PartialEq for Frontier {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Frontier {
	fn cmp(&self, other: &Self) -> Ordering {
		// reversed to turn the max-heap into a min-heap
		other
			.cost
			.total_cmp(&self.cost)
			.then_with(|| other.sequence.cmp(&self.sequence))
	}
}

/// Find a route from `start` to `finish` as a list of waypoints. The start
/// itself is not included, the finish always is. An empty list means no
/// route exists or the finish is not within any [Area]
pub fn find_path(graph: &AreaGraph, start: Vec2, finish: Vec2) -> Vec<Vec2> {
	let Some(start_area) = graph
		.get_area_containing(start)
		.or_else(|| graph.get_area_nearest(start))
	else {
		trace!("No areas to path from {}", start);
		return vec![];
	};
	let Some(finish_area) = graph.get_area_containing(finish) else {
		trace!("Finish {} is not within a free area", finish);
		return vec![];
	};
	if start_area == finish_area {
		return vec![finish];
	}

	let mut places = vec![Place::new(start, start_area, 0.0, start.distance(finish), None)];
	// cheapest known running cost to reach each portal
	let mut best: HashMap<(AreaID, UVec2), f32> = HashMap::new();
	let mut closed: HashSet<(AreaID, UVec2)> = HashSet::new();
	let mut frontier = BinaryHeap::new();
	let mut sequence = 0;
	frontier.push(Frontier {
		cost: places[0].cost,
		sequence,
		node: 0,
	});

	while let Some(Frontier { node, .. }) = frontier.pop() {
		let current = places[node];
		if current.from.is_some() {
			let key = (current.area, current.position.as_uvec2());
			// a cheaper route to this portal has already been expanded
			if !closed.insert(key) {
				continue;
			}
		}
		if current.area == finish_area {
			trace!("Found path after visiting {} places", places.len());
			return reduce_path(&places, node, finish);
		}
		let Some(area) = graph.get_area(current.area) else {
			continue;
		};
		for portal in area.get_portals() {
			let key = (portal.get_neighbour(), portal.get_position());
			if closed.contains(&key) {
				continue;
			}
			let position = portal.get_position().as_vec2();
			let running_cost = current.running_cost + current.position.distance(position);
			if best.get(&key).is_some_and(|known| *known <= running_cost) {
				continue;
			}
			best.insert(key, running_cost);
			let cost = running_cost + position.distance(finish);
			places.push(Place::new(
				position,
				portal.get_neighbour(),
				running_cost,
				cost,
				Some(node),
			));
			sequence += 1;
			frontier.push(Frontier {
				cost,
				sequence,
				node: places.len() - 1,
			});
		}
	}
	debug!("No path from {} to {}", start, finish);
	vec![]
}
