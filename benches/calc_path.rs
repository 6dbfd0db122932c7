//! Measure calculating a path from one corner of the world to the other
//!
//! World is 512x512 cells of zig-zagging walls
//!

use std::time::Duration;

use bevy::prelude::*;
use bevy_area_navmesh_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Search from the top left to the bottom right and cache the result
fn calc(nav_mesh: &NavMesh, source: Vec2, target: Vec2) {
	let mut path_cache = PathCache::default();
	let path = nav_mesh.find_path(source, target);
	path_cache.insert_path(source, target, Duration::default(), path);
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(100);
	let grid = OccupancyGrid::new(grid_fixtures::serpentine(512, 512, 8, 4)).unwrap();
	let dimensions = NavMeshDimensions::from_grid(&grid, 1).unwrap();
	let nav_mesh = NavMesh::new(&grid, &dimensions).unwrap();
	let source = Vec2::new(0.5, 0.5);
	let target = Vec2::new(511.5, 510.5);
	group.bench_function("calc_path", |b| {
		b.iter(|| calc(black_box(&nav_mesh), black_box(source), black_box(target)))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
