//! World layout constants for the looping parallax grove.

/// Half-width of the conveyor range. Props wrap from `+OFFSET_X` back to
/// `-OFFSET_X`.
pub const OFFSET_X: f32 = 20.0;

/// World-space ground height the whole scene group sits at.
pub const GROUND_Y: f32 = -1.0;

pub const LAMPS_NB: usize = 10;
pub const LAMPS_SPEED: f32 = 0.8;
pub const TREES_NB: usize = 16;
pub const TREES_SPEED: f32 = 0.4;
pub const FAR_TREES_NB: usize = 12;
pub const FAR_TREES_SPEED: f32 = 0.08;
pub const ROCKS_NB: usize = 6;
pub const ROCKS_SPEED: f32 = 0.5;

pub const LAMPS_DEPTH: f32 = -1.5;
pub const TREES_DEPTH: f32 = -3.5;
pub const FAR_TREES_DEPTH: f32 = -6.0;
pub const ROCKS_DEPTH: f32 = 1.0;

pub const LAMP_SCALE: f32 = 0.5;
pub const TREE_SCALE: f32 = 0.1;
pub const FAR_TREE_SCALE: f32 = 0.15;
pub const ROCK_SCALE: f32 = 0.1;

/// Full spread of the one-time position jitter (uniform in ±half).
pub const RANDOMIZER_STRENGTH_POSITION: f32 = 1.0;
/// Full spread of the one-time per-axis scale jitter (uniform in ±half).
pub const RANDOMIZER_STRENGTH_SCALE: f32 = 0.42;
