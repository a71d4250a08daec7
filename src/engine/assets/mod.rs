//! Asset definitions and handle storage for the grove scene.

/// Scene manifest as a JSON-backed Bevy asset. Names every runtime asset
/// the scene loads: prop and character models, environment maps, audio.
pub mod scene_manifest;

/// Typed handle store for everything the manifest names, plus the tracked
/// handle list the loading progress is computed over.
pub mod scene_assets;
