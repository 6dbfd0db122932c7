//! Turns the chain of nodes found by a search into waypoints. Consecutive
//! nodes travelling in the same direction are collapsed so only the points
//! where the route turns are kept
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Backtrack from the `terminal` node through its predecessors, keeping each
/// node where the direction of travel changes, and return the waypoints in
/// start to finish order. `finish` is appended when the terminal node is not
/// already on it
pub fn reduce_path(places: &[Place], terminal: usize, finish: Vec2) -> Vec<Vec2> {
	let mut waypoints = Vec::new();
	let Some(last) = places.get(terminal) else {
		return waypoints;
	};
	if last.get_position() != finish {
		waypoints.push(finish);
	}
	let mut direction: Option<Vec2> = None;
	let mut index = terminal;
	while let Some(from) = places[index].get_from() {
		let Some(previous) = places.get(from) else {
			break;
		};
		let step = places[index].get_position() - previous.get_position();
		// standing still has no direction, skip it
		if step != Vec2::ZERO {
			let turned = direction.is_none_or(|d| !is_same_direction(d, step));
			if turned {
				waypoints.push(places[index].get_position());
				direction = Some(step);
			}
		}
		index = from;
	}
	waypoints.reverse();
	waypoints
}
