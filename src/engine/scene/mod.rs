//! Scene composition for the looping parallax grove.
//!
//! Provides the conveyor animation that loops background props through the
//! visible range, the prop category layout and reconciliation, and the
//! static characters, lighting and atmosphere.

/// Per-frame conveyor translation with wraparound reset, plus the one-time
/// spawn jitter that keeps repeated instances from looking identical.
pub mod conveyor;

/// Prop categories, spacing layout, and configuration-driven spawn and
/// reconciliation of the animated background.
pub mod background;

/// The two static character models at the centre of the scene.
pub mod characters;

/// Ambient, directional and environment lighting plus the ground
/// contact-shadow decal.
pub mod environment;
