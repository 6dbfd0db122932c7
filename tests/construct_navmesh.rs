//! Build a navmesh from a level on disk and path across it, both directly and
//! through the plugin
//!

use bevy::prelude::*;
use bevy_area_navmesh_plugin::prelude::*;

/// Read the rows of the level fixture
fn level_rows() -> Vec<Vec<u8>> {
	let path = env!("CARGO_MANIFEST_DIR").to_string() + "/assets/occupancy_grid.ron";
	let contents = std::fs::read_to_string(path).unwrap();
	ron::from_str(&contents).unwrap()
}

/// Build the navmesh of the level fixture
fn level_nav_mesh(actor_size: u32) -> (OccupancyGrid, NavMesh) {
	let grid = OccupancyGrid::new(level_rows()).unwrap();
	let dimensions = NavMeshDimensions::from_grid(&grid, actor_size).unwrap();
	let nav_mesh = NavMesh::new(&grid, &dimensions).unwrap();
	(grid, nav_mesh)
}

#[test]
fn areas_cover_free_cells() {
	let (grid, nav_mesh) = level_nav_mesh(1);
	assert_eq!((16, 12), grid.get_dimensions());
	for y in 0..12 {
		for x in 0..16 {
			let point = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
			let containing = nav_mesh
				.get_graph()
				.get_areas()
				.iter()
				.filter(|a| a.contains(point))
				.count();
			let expected = if grid.is_blocked(x, y) { 0 } else { 1 };
			assert_eq!(expected, containing, "cell ({}, {})", x, y);
		}
	}
}

#[test]
fn path_into_enclosure() {
	let (_, nav_mesh) = level_nav_mesh(1);
	let finish = Vec2::new(4.5, 4.5);
	let path = nav_mesh.find_path(Vec2::new(0.5, 0.5), finish);
	assert!(path.len() > 1);
	assert_eq!(Some(&finish), path.last());
}

#[test]
fn sealed_room_is_unreachable() {
	let (_, nav_mesh) = level_nav_mesh(1);
	assert!(nav_mesh
		.find_path(Vec2::new(0.5, 0.5), Vec2::new(3.5, 10.5))
		.is_empty());
}

#[test]
fn target_on_wall_is_unreachable() {
	let (_, nav_mesh) = level_nav_mesh(1);
	assert!(nav_mesh
		.find_path(Vec2::new(0.5, 0.5), Vec2::new(2.5, 2.5))
		.is_empty());
}

#[test]
fn larger_actor_has_fewer_areas() {
	let (_, small) = level_nav_mesh(1);
	let (_, large) = level_nav_mesh(2);
	assert!(large.get_graph().len() < small.get_graph().len());
	for area in large.get_graph().get_areas() {
		for neighbour in area.get_neighbours() {
			let other = large.get_graph().get_area(*neighbour).unwrap();
			assert!(are_neighbours(area, other, 2));
		}
	}
}

#[test]
fn plugin_answers_requests_and_tracks_grid_changes() {
	let mut app = App::new();
	app.add_plugins((MinimalPlugins, NavMeshPlugin));
	let bundle = NavMeshBundle::from_rows(level_rows(), 1).unwrap();
	let entity = app.world_mut().spawn(bundle).id();

	let source = Vec2::new(0.5, 0.5);
	let sealed = Vec2::new(3.5, 10.5);
	let open = Vec2::new(14.5, 11.5);
	app.world_mut().send_event(EventPathRequest::new(source, sealed));
	app.world_mut().send_event(EventPathRequest::new(source, open));
	app.update();
	{
		let cache = app.world().get::<PathCache>(entity).unwrap();
		assert_eq!(2, cache.len());
		assert_eq!(Some(&Vec::new()), cache.get_path(source, sealed));
		assert_eq!(Some(&open), cache.get_path(source, open).unwrap().last());
	}

	// knock a hole in the wall of the sealed room and ask again
	app.world_mut()
		.send_event(EventUpdateOccupancyCell::new(UVec2::new(8, 10), 0));
	app.world_mut().send_event(EventPathRequest::new(source, sealed));
	app.update();
	let cache = app.world().get::<PathCache>(entity).unwrap();
	assert_eq!(1, cache.len());
	assert_eq!(Some(&sealed), cache.get_path(source, sealed).unwrap().last());
	let grid = app.world().get::<OccupancyGrid>(entity).unwrap();
	assert_eq!(Some(0), grid.get_cell_value(UVec2::new(8, 10)));
}
