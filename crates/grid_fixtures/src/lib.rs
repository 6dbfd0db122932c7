//! Occupancy grid layouts shared by the tests and benches. Each layout is
//! returned as rows of cells indexed `[y][x]` where `0` is free and `1` is
//! blocked
//!

/// Every cell free
pub fn open(width: usize, height: usize) -> Vec<Vec<u8>> {
	vec![vec![0; width]; height]
}

/// A full width wall along `row` splitting the grid in two
pub fn split(width: usize, height: usize, row: usize) -> Vec<Vec<u8>> {
	let mut rows = open(width, height);
	if let Some(r) = rows.get_mut(row) {
		r.fill(1);
	}
	rows
}

/// Horizontal walls every `spacing` rows, each with a gap of `gap` cells
/// alternating between the right and left edges so a route has to zig-zag
/// down the grid
///
/// ```text
///  ____________
/// |            |
/// |#########   |
/// |            |
/// |   #########|
/// |            |
/// ```
pub fn serpentine(width: usize, height: usize, spacing: usize, gap: usize) -> Vec<Vec<u8>> {
	let mut rows = open(width, height);
	let spacing = spacing.max(2);
	let wall_length = width.saturating_sub(gap);
	for (i, y) in (spacing - 1..height).step_by(spacing).enumerate() {
		let range = if i % 2 == 0 {
			0..wall_length
		} else {
			gap..width
		};
		for x in range {
			rows[y][x] = 1;
		}
	}
	rows
}

/// Parse a grid drawn with `#` for blocked cells and anything else for free
/// ones, one line per row. Blank lines and surrounding whitespace are ignored
pub fn from_ascii(layout: &str) -> Vec<Vec<u8>> {
	layout
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(|line| line.chars().map(|c| u8::from(c == '#')).collect())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn split_wall() {
		let rows = split(3, 3, 1);
		assert_eq!(vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]], rows);
	}
	#[test]
	fn serpentine_gaps_alternate() {
		let rows = serpentine(6, 6, 2, 2);
		assert_eq!(vec![1, 1, 1, 1, 0, 0], rows[1]);
		assert_eq!(vec![0, 0, 1, 1, 1, 1], rows[3]);
		assert_eq!(vec![1, 1, 1, 1, 0, 0], rows[5]);
		assert_eq!(vec![0; 6], rows[0]);
	}
	#[test]
	fn ascii() {
		let rows = from_ascii(
			"
			..#
			#..
			",
		);
		assert_eq!(vec![vec![0, 0, 1], vec![1, 0, 0]], rows);
	}
}
