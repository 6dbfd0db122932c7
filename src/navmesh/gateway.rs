//! Finds the point an actor should aim for when crossing from one [Area] into
//! a neighbour.
//!
//! The gateway sits on the line of the shared border, halfway along the
//! overlapping segment, and is pushed `floor(actor_size / 2)` cells into the
//! Area being entered so that an actor centred on it clears the border. The
//! push stops at the last row or column of that Area:
//!
//! ```text
//!  ___________ _______
//! |           |       |
//! |   from    x       |   x = gateway into `to` for an actor of size 1
//! |           |  to   |
//! |___________|_______|
//! ```
//!
//! Corridors one cell wide or tall leave no room to pick a margin so their
//! origin is used instead.

use bevy::prelude::*;

use crate::prelude::*;

/// Compute the crossing point from `from` into `to`. Returns `None` when the
/// two Areas do not share a border
pub fn compute_gateway(to: &Area, from: &Area, actor_size: u32) -> Option<UVec2> {
	let border = from.get_shared_border(to)?;
	if to.get_width() == 1 || to.get_height() == 1 {
		return Some(to.get_origin());
	}
	let inset = actor_size / 2;
	let along = border.get_midpoint();
	let gateway = match border.get_side() {
		// `to` is to the right of `from`, enter through its left side
		Ordinal::East => UVec2::new((to.get_x() + inset).min(to.get_right() - 1), along),
		// `to` is to the left, enter through its right side
		Ordinal::West => UVec2::new(to.get_right().saturating_sub(inset).max(to.get_x()), along),
		// `to` is below, enter through its top side
		Ordinal::South => UVec2::new(along, (to.get_y() + inset).min(to.get_bottom() - 1)),
		// `to` is above, enter through its bottom side
		Ordinal::North => UVec2::new(along, to.get_bottom().saturating_sub(inset).max(to.get_y())),
	};
	Some(gateway)
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn enter_from_left() {
		let from = Area::new(0, 0, 4, 4);
		let to = Area::new(4, 0, 4, 4);
		assert_eq!(Some(UVec2::new(4, 2)), compute_gateway(&to, &from, 1));
	}
	#[test]
	fn enter_from_left_with_inset() {
		let from = Area::new(0, 0, 4, 4);
		let to = Area::new(4, 0, 4, 4);
		assert_eq!(Some(UVec2::new(5, 2)), compute_gateway(&to, &from, 2));
		assert_eq!(Some(UVec2::new(5, 2)), compute_gateway(&to, &from, 3));
	}
	#[test]
	fn enter_from_right() {
		let from = Area::new(4, 0, 4, 4);
		let to = Area::new(0, 0, 4, 4);
		assert_eq!(Some(UVec2::new(4, 2)), compute_gateway(&to, &from, 1));
		assert_eq!(Some(UVec2::new(3, 2)), compute_gateway(&to, &from, 2));
	}
	#[test]
	fn enter_from_above() {
		let from = Area::new(0, 0, 4, 2);
		let to = Area::new(0, 2, 4, 2);
		assert_eq!(Some(UVec2::new(2, 2)), compute_gateway(&to, &from, 1));
		assert_eq!(Some(UVec2::new(2, 3)), compute_gateway(&to, &from, 2));
	}
	#[test]
	fn enter_from_below() {
		let from = Area::new(0, 2, 4, 2);
		let to = Area::new(0, 0, 4, 2);
		assert_eq!(Some(UVec2::new(2, 2)), compute_gateway(&to, &from, 1));
		assert_eq!(Some(UVec2::new(2, 1)), compute_gateway(&to, &from, 2));
	}
	#[test]
	fn midpoint_of_partial_overlap() {
		let from = Area::new(0, 0, 2, 4);
		let to = Area::new(2, 2, 2, 2);
		assert_eq!(Some(UVec2::new(2, 3)), compute_gateway(&to, &from, 1));
	}
	#[test]
	fn inset_clamped_to_area() {
		let from = Area::new(0, 0, 4, 8);
		let to = Area::new(4, 0, 2, 8);
		// an inset of 4 would leave the area, stop on its last column
		let gateway = compute_gateway(&to, &from, 8).unwrap();
		assert_eq!(UVec2::new(5, 4), gateway);
		assert!(to.contains(gateway.as_vec2()));
	}
	#[test]
	fn inset_clamped_to_area_below() {
		let from = Area::new(0, 0, 8, 4);
		let to = Area::new(0, 4, 8, 2);
		let gateway = compute_gateway(&to, &from, 8).unwrap();
		assert_eq!(UVec2::new(4, 5), gateway);
		assert!(to.contains(gateway.as_vec2()));
	}
	#[test]
	fn inset_clamped_to_area_left_and_above() {
		let from = Area::new(2, 2, 4, 8);
		let to = Area::new(0, 2, 2, 8);
		assert_eq!(Some(UVec2::new(0, 6)), compute_gateway(&to, &from, 8));
		let from = Area::new(2, 2, 8, 4);
		let to = Area::new(2, 0, 8, 2);
		assert_eq!(Some(UVec2::new(6, 0)), compute_gateway(&to, &from, 8));
	}
	#[test]
	fn corridor_uses_origin() {
		let from = Area::new(0, 0, 4, 4);
		let to = Area::new(4, 0, 1, 4);
		assert_eq!(Some(UVec2::new(4, 0)), compute_gateway(&to, &from, 1));
		let to = Area::new(0, 4, 4, 1);
		assert_eq!(Some(UVec2::new(0, 4)), compute_gateway(&to, &from, 1));
	}
	#[test]
	fn no_shared_border() {
		let from = Area::new(0, 0, 2, 2);
		let to = Area::new(2, 2, 2, 2);
		assert_eq!(None, compute_gateway(&to, &from, 1));
	}
}
