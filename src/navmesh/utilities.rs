//! Useful structures and tools used by the navmesh
//!

use bevy::prelude::*;

/// Number of seconds a calculated path is kept in the
/// [PathCache](crate::prelude::PathCache) before it is purged (15 minutes)
pub const PATH_EXPIRY_SECONDS: u64 = 900;

/// Relative tolerance used when comparing the direction of two path segments
const DIRECTION_TOLERANCE: f32 = 1e-4;

/// Convenience way of referring to the 4 sides of an [Area](crate::prelude::Area)
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Ordinal {
	/// Side running along the minimum `y`
	North,
	/// Side running along the maximum `x`
	East,
	/// Side running along the maximum `y`
	South,
	/// Side running along the minimum `x`
	West,
}

impl Ordinal {
	/// All sides in clockwise order starting from `North`
	pub const ALL: [Ordinal; 4] = [Ordinal::North, Ordinal::East, Ordinal::South, Ordinal::West];
	/// Returns the opposite [Ordinal] of the current
	pub fn inverse(&self) -> Ordinal {
		match self {
			Ordinal::North => Ordinal::South,
			Ordinal::East => Ordinal::West,
			Ordinal::South => Ordinal::North,
			Ordinal::West => Ordinal::East,
		}
	}
	/// Position of the side within [Ordinal::ALL], handy for indexing
	/// per-side arrays
	pub fn index(&self) -> usize {
		match self {
			Ordinal::North => 0,
			Ordinal::East => 1,
			Ordinal::South => 2,
			Ordinal::West => 3,
		}
	}
	/// Whether the side lies on a vertical border line (constant `x`)
	pub fn is_vertical(&self) -> bool {
		matches!(self, Ordinal::East | Ordinal::West)
	}
}

/// Whether two movement vectors point the same way. Zero-length vectors
/// have no direction and never match
pub fn is_same_direction(a: Vec2, b: Vec2) -> bool {
	let magnitude = a.length() * b.length();
	if magnitude == 0.0 {
		return false;
	}
	a.perp_dot(b).abs() <= DIRECTION_TOLERANCE * magnitude && a.dot(b) > 0.0
}
