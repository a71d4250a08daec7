//! Asset loading and start-screen systems.
//!
//! Manages the loading pipeline from manifest parsing through model and
//! audio requests to the progress-gated start screen.

/// Scene manifest loading and asset request fan-out.
///
/// Requests every model, environment map and audio path the manifest names
/// once the manifest JSON itself has parsed.
pub mod manifest_loader;

/// Load-state polling for the tracked asset handles.
///
/// Converts per-handle load states into the single progress percentage the
/// start screen is gated on.
pub mod asset_tracker;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Loading screen UI: progress bar, title board and the Start control.
pub mod start_screen;
