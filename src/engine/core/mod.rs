//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the camera, loading screen, state-scoped
/// scene systems and platform-specific configuration.
pub mod app_setup;

/// Application state machine for the loading/start/running session gate.
///
/// Manages states from asset loading through start-screen readiness to the
/// live scene.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
