//! Splits an [OccupancyGrid] into free [Area]s with a quadtree.
//!
//! A region containing no blocked cells becomes a single Area. Otherwise it
//! is quartered, the top-left quadrant taking `floor(width / 2)` by
//! `floor(height / 2)` cells and the remainders going right and down:
//!
//! ```text
//!  _______________
//! |       |       |
//! |  TL   |  TR   |
//! |_______|_______|
//! |       |       |
//! |  BL   |  BR   |
//! |_______|_______|
//! ```
//!
//! Once both halves of a blocked region are smaller than an actor the
//! recursion stops and the region is discarded, an actor could not stand in
//! whatever free cells remain.
//!
//! As quadrants are recombined the Areas lying along the facing borders
//! (TL-TR, TL-BL, TR-BR, BL-BR) are linked as neighbours when an actor can
//! cross between them. TL and BR only meet at a corner so are never linked.

use bevy::{math::URect, prelude::*};

use crate::prelude::*;

/// The Areas found within one quadrant along with those touching each of its
/// sides, indexed by [Ordinal::index]
#[derive(Default)]
struct Quadrant {
	/// Areas touching the north, east, south and west sides of the quadrant
	borders: [Vec<AreaID>; 4],
}

impl Quadrant {
	/// Get the Areas touching a side
	fn get_border(&self, side: Ordinal) -> &[AreaID] {
		&self.borders[side.index()]
	}
}

/// Decompose the `region` of the `grid` into free [Area]s. Each Area records
/// the [AreaID]s of its neighbours, the IDs being indices into the returned
/// list
pub fn decompose(grid: &OccupancyGrid, region: URect, actor_size: u32) -> Vec<Area> {
	let mut arena = Vec::new();
	decompose_region(
		grid,
		region.min.x,
		region.min.y,
		region.width(),
		region.height(),
		actor_size,
		&mut arena,
	);
	arena
}

/// Recursively decompose the rectangle at `(x, y)` of size `width` by
/// `height`, pushing found Areas into the `arena`
fn decompose_region(
	grid: &OccupancyGrid,
	x: u32,
	y: u32,
	width: u32,
	height: u32,
	actor_size: u32,
	arena: &mut Vec<Area>,
) -> Quadrant {
	if width == 0 || height == 0 {
		return Quadrant::default();
	}
	if !grid.has_block(x, y, width, height) {
		let id = AreaID::new(arena.len());
		arena.push(Area::new(x, y, width, height));
		return Quadrant {
			borders: [vec![id], vec![id], vec![id], vec![id]],
		};
	}
	let left_width = width / 2;
	let top_height = height / 2;
	if left_width < actor_size && top_height < actor_size {
		return Quadrant::default();
	}
	let right_width = width - left_width;
	let bottom_height = height - top_height;
	let mid_x = x + left_width;
	let mid_y = y + top_height;

	let tl = decompose_region(grid, x, y, left_width, top_height, actor_size, arena);
	let tr = decompose_region(grid, mid_x, y, right_width, top_height, actor_size, arena);
	let bl = decompose_region(grid, x, mid_y, left_width, bottom_height, actor_size, arena);
	let br = decompose_region(grid, mid_x, mid_y, right_width, bottom_height, actor_size, arena);

	link(tl.get_border(Ordinal::East), tr.get_border(Ordinal::West), actor_size, arena);
	link(bl.get_border(Ordinal::East), br.get_border(Ordinal::West), actor_size, arena);
	link(tl.get_border(Ordinal::South), bl.get_border(Ordinal::North), actor_size, arena);
	link(tr.get_border(Ordinal::South), br.get_border(Ordinal::North), actor_size, arena);

	// a zero sized top row or left column means the other quadrants reach
	// the outer side
	let (north_a, north_b) = if top_height > 0 { (&tl, &tr) } else { (&bl, &br) };
	let (west_a, west_b) = if left_width > 0 { (&tl, &bl) } else { (&tr, &br) };
	Quadrant {
		borders: [
			join(north_a.get_border(Ordinal::North), north_b.get_border(Ordinal::North)),
			join(tr.get_border(Ordinal::East), br.get_border(Ordinal::East)),
			join(bl.get_border(Ordinal::South), br.get_border(Ordinal::South)),
			join(west_a.get_border(Ordinal::West), west_b.get_border(Ordinal::West)),
		],
	}
}

/// Cross-link the Areas on two facing borders which an actor can pass between
fn link(first: &[AreaID], second: &[AreaID], actor_size: u32, arena: &mut [Area]) {
	for a in first {
		for b in second {
			if are_neighbours(&arena[a.get()], &arena[b.get()], actor_size) {
				arena[a.get()].add_neighbour(*b);
				arena[b.get()].add_neighbour(*a);
			}
		}
	}
}

/// Concatenate two lists of IDs
fn join(first: &[AreaID], second: &[AreaID]) -> Vec<AreaID> {
	let mut ids = Vec::with_capacity(first.len() + second.len());
	ids.extend_from_slice(first);
	ids.extend_from_slice(second);
	ids
}
