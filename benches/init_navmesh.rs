//! Measure decomposing a grid and pointizing the resulting areas
//!
//! World is 512x512 cells of zig-zagging walls
//!

use bevy_area_navmesh_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Decompose and pointize the grid
fn init(grid: &OccupancyGrid, dimensions: &NavMeshDimensions) -> NavMesh {
	NavMesh::new(grid, dimensions).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("data_initialisation");
	group.significance_level(0.05).sample_size(100);
	let grid = OccupancyGrid::new(grid_fixtures::serpentine(512, 512, 8, 4)).unwrap();
	let dimensions = NavMeshDimensions::from_grid(&grid, 1).unwrap();
	group.bench_function("init_navmesh", |b| {
		b.iter(|| init(black_box(&grid), black_box(&dimensions)))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
