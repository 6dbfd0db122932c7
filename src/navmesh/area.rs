//! An [Area] is a rectangle of the [OccupancyGrid] which contains no blocked
//! cells. Areas are discovered by [decompose](crate::navmesh::decompose) and
//! live in an arena owned by the [AreaGraph], other Areas refer to them by
//! their [AreaID].
//!
//! Two Areas are neighbours when they share an edge and the overlapping
//! length of that edge is at least the size of an actor, otherwise an actor
//! could not squeeze across the border:
//!
//! ```text
//!  _______________
//! |       |       |
//! |   A   |___B___|   A and B share a border 2 cells long
//! |       |       |
//! |_______|   C   |   A and C share a border 2 cells long
//!         |_______|
//! ```
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Unique ID of an [Area], the index of the Area within the [AreaGraph]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct AreaID(usize);

impl AreaID {
	/// Create a new instance of [AreaID]
	pub fn new(index: usize) -> Self {
		AreaID(index)
	}
	/// Get the index of the [Area] within the [AreaGraph]
	pub fn get(&self) -> usize {
		self.0
	}
}

/// A crossing point from one [Area] into a neighbouring one
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Portal {
	/// Grid position of the crossing point
	position: UVec2,
	/// The [Area] entered by crossing the portal
	neighbour: AreaID,
}

impl Portal {
	/// Create a new instance of [Portal]
	pub fn new(position: UVec2, neighbour: AreaID) -> Self {
		Portal {
			position,
			neighbour,
		}
	}
	/// Get the grid position of the portal
	pub fn get_position(&self) -> UVec2 {
		self.position
	}
	/// Get the [AreaID] of the [Area] the portal leads into
	pub fn get_neighbour(&self) -> AreaID {
		self.neighbour
	}
}

/// The segment of an edge shared by two [Area]s
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SharedBorder {
	/// Which side of the first [Area] touches the second
	side: Ordinal,
	/// Start of the overlap along the border line, inclusive
	start: u32,
	/// End of the overlap along the border line, exclusive
	end: u32,
}

impl SharedBorder {
	/// Get the side of the first [Area] that touches the second
	pub fn get_side(&self) -> Ordinal {
		self.side
	}
	/// Get the inclusive start of the overlap
	pub fn get_start(&self) -> u32 {
		self.start
	}
	/// Get the exclusive end of the overlap
	pub fn get_end(&self) -> u32 {
		self.end
	}
	/// Number of cells the two Areas have in common along the border
	pub fn get_length(&self) -> u32 {
		self.end - self.start
	}
	/// Midpoint of the overlap, rounded down
	pub fn get_midpoint(&self) -> u32 {
		(self.start + self.end) / 2
	}
}

/// A free rectangle of the grid
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Area {
	/// Column of the top-left cell
	x: u32,
	/// Row of the top-left cell
	y: u32,
	/// Number of columns covered
	width: u32,
	/// Number of rows covered
	height: u32,
	/// Areas which can be reached by crossing a border of this one
	neighbours: Vec<AreaID>,
	/// Crossing points into each neighbour, populated when the graph is
	/// pointized
	portals: Vec<Portal>,
}

impl Area {
	/// Create a new instance of [Area] without any neighbours
	pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Area {
			x,
			y,
			width,
			height,
			neighbours: Vec::new(),
			portals: Vec::new(),
		}
	}
	/// Get the column of the top-left cell
	pub fn get_x(&self) -> u32 {
		self.x
	}
	/// Get the row of the top-left cell
	pub fn get_y(&self) -> u32 {
		self.y
	}
	/// Get the width
	pub fn get_width(&self) -> u32 {
		self.width
	}
	/// Get the height
	pub fn get_height(&self) -> u32 {
		self.height
	}
	/// Get the `x` of the right hand border line (exclusive)
	pub fn get_right(&self) -> u32 {
		self.x + self.width
	}
	/// Get the `y` of the bottom border line (exclusive)
	pub fn get_bottom(&self) -> u32 {
		self.y + self.height
	}
	/// Get the top-left corner
	pub fn get_origin(&self) -> UVec2 {
		UVec2::new(self.x, self.y)
	}
	/// Get the centre point
	pub fn get_centre(&self) -> Vec2 {
		Vec2::new(
			self.x as f32 + self.width as f32 / 2.0,
			self.y as f32 + self.height as f32 / 2.0,
		)
	}
	/// Get the IDs of neighbouring Areas
	pub fn get_neighbours(&self) -> &[AreaID] {
		&self.neighbours
	}
	/// Get the portals leading out of the Area
	pub fn get_portals(&self) -> &[Portal] {
		&self.portals
	}
	/// Record `id` as a neighbour, ignoring duplicates
	pub(crate) fn add_neighbour(&mut self, id: AreaID) {
		if !self.neighbours.contains(&id) {
			self.neighbours.push(id);
		}
	}
	/// Replace the portals of the Area
	pub(crate) fn set_portals(&mut self, portals: Vec<Portal>) {
		self.portals = portals;
	}
	/// Whether the point lies within the Area, the left and top borders are
	/// inclusive while the right and bottom are exclusive
	pub fn contains(&self, point: Vec2) -> bool {
		point.x >= self.x as f32
			&& point.x < self.get_right() as f32
			&& point.y >= self.y as f32
			&& point.y < self.get_bottom() as f32
	}
	/// Distance from `point` to whichever is closer of the top-left and the
	/// bottom-right corners
	pub fn corner_distance(&self, point: Vec2) -> f32 {
		let near = Vec2::new(self.x as f32, self.y as f32);
		let far = Vec2::new(self.get_right() as f32, self.get_bottom() as f32);
		point.distance(near).min(point.distance(far))
	}
	/// Straight line distance between the centres of two Areas
	pub fn centre_distance(&self, other: &Area) -> f32 {
		self.get_centre().distance(other.get_centre())
	}
	/// If `other` touches one of the sides of `self` with a non-zero overlap
	/// then describe the shared segment. Areas meeting only at a corner share
	/// nothing
	pub fn get_shared_border(&self, other: &Area) -> Option<SharedBorder> {
		let vertical_overlap = (self.y.max(other.y), self.get_bottom().min(other.get_bottom()));
		let horizontal_overlap = (self.x.max(other.x), self.get_right().min(other.get_right()));
		let side = if self.get_right() == other.x {
			Ordinal::East
		} else if other.get_right() == self.x {
			Ordinal::West
		} else if self.get_bottom() == other.y {
			Ordinal::South
		} else if other.get_bottom() == self.y {
			Ordinal::North
		} else {
			return None;
		};
		let (start, end) = if side.is_vertical() {
			vertical_overlap
		} else {
			horizontal_overlap
		};
		if start < end {
			Some(SharedBorder { side, start, end })
		} else {
			None
		}
	}
}

/// Whether an actor of `actor_size` can cross from `a` into `b`, the Areas
/// must share an edge whose overlap is at least `actor_size` cells long
pub fn are_neighbours(a: &Area, b: &Area, actor_size: u32) -> bool {
	a.get_shared_border(b)
		.is_some_and(|border| border.get_length() >= actor_size)
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn edges() {
		let area = Area::new(2, 3, 4, 5);
		assert_eq!(6, area.get_right());
		assert_eq!(8, area.get_bottom());
		assert_eq!(UVec2::new(2, 3), area.get_origin());
		assert_eq!(Vec2::new(4.0, 5.5), area.get_centre());
	}
	#[test]
	fn contains_half_open() {
		let area = Area::new(0, 0, 2, 2);
		assert!(area.contains(Vec2::new(0.0, 0.0)));
		assert!(area.contains(Vec2::new(1.99, 1.99)));
		assert!(!area.contains(Vec2::new(2.0, 1.0)));
		assert!(!area.contains(Vec2::new(1.0, 2.0)));
		assert!(!area.contains(Vec2::new(-0.1, 1.0)));
	}
	#[test]
	fn corner_distance_picks_closest() {
		let area = Area::new(0, 0, 4, 4);
		assert_eq!(1.0, area.corner_distance(Vec2::new(5.0, 4.0)));
		assert_eq!(2.0, area.corner_distance(Vec2::new(0.0, -2.0)));
	}
	#[test]
	fn centre_distance() {
		let a = Area::new(0, 0, 2, 2);
		let b = Area::new(4, 0, 2, 2);
		assert_eq!(4.0, a.centre_distance(&b));
	}
	#[test]
	fn shared_border_east() {
		let a = Area::new(0, 0, 4, 4);
		let b = Area::new(4, 2, 2, 6);
		let border = a.get_shared_border(&b).unwrap();
		assert_eq!(Ordinal::East, border.get_side());
		assert_eq!((2, 4), (border.get_start(), border.get_end()));
		assert_eq!(2, border.get_length());
		assert_eq!(3, border.get_midpoint());
		let border = b.get_shared_border(&a).unwrap();
		assert_eq!(Ordinal::West, border.get_side());
		assert_eq!(2, border.get_length());
	}
	#[test]
	fn shared_border_south() {
		let a = Area::new(0, 0, 4, 2);
		let b = Area::new(1, 2, 8, 2);
		let border = a.get_shared_border(&b).unwrap();
		assert_eq!(Ordinal::South, border.get_side());
		assert_eq!((1, 4), (border.get_start(), border.get_end()));
		assert_eq!(Ordinal::North, b.get_shared_border(&a).unwrap().get_side());
	}
	#[test]
	fn corner_touch_is_not_a_border() {
		let a = Area::new(0, 0, 2, 2);
		let b = Area::new(2, 2, 2, 2);
		assert_eq!(None, a.get_shared_border(&b));
		assert!(!are_neighbours(&a, &b, 1));
	}
	#[test]
	fn apart_is_not_a_border() {
		let a = Area::new(0, 0, 2, 2);
		let b = Area::new(3, 0, 2, 2);
		assert_eq!(None, a.get_shared_border(&b));
	}
	#[test]
	fn neighbours_need_room_for_actor() {
		let a = Area::new(0, 0, 4, 4);
		let b = Area::new(4, 3, 4, 4);
		assert!(are_neighbours(&a, &b, 1));
		assert!(!are_neighbours(&a, &b, 2));
		let c = Area::new(4, 0, 4, 4);
		assert!(are_neighbours(&a, &c, 4));
		assert!(are_neighbours(&c, &a, 4));
		assert!(!are_neighbours(&a, &c, 5));
	}
	#[test]
	fn add_neighbour_ignores_duplicates() {
		let mut area = Area::new(0, 0, 1, 1);
		area.add_neighbour(AreaID::new(3));
		area.add_neighbour(AreaID::new(3));
		area.add_neighbour(AreaID::new(1));
		assert_eq!(&[AreaID::new(3), AreaID::new(1)], area.get_neighbours());
	}
}
