//! This is a plugin for Bevy game engine to decompose an occupancy grid into a navigation mesh of free areas and calculate waypoint paths across it
//!

pub mod bundle;
pub mod navmesh;
pub mod plugin;

pub mod prelude;
