//! `use bevy_area_navmesh_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::navmesh::{
	area::*, area_graph::*, decompose::*, error::*, gateway::*, grid::*, path_cache::*, reduce::*,
	search::*, utilities::*, NavMesh, NavMeshDimensions,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{grid_layer::*, path_layer::*, *},
};
