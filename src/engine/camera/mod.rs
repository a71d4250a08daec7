//! Constrained orbit camera for the grove viewport.

/// Orbit state, movement constraints and the mouse/wheel controller.
pub mod orbit_camera;
