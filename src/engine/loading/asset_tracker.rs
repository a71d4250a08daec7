use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::loading::progress::{self, LoadingProgress};

/// Poll the tracked handles and fold their load states into the progress
/// percentage the start screen is gated on.
pub fn check_asset_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<SceneAssets>,
    asset_server: Res<AssetServer>,
) {
    if !loading_progress.manifest_loaded || loading_progress.percent >= 100.0 {
        return;
    }

    let tracked = assets.tracked();
    let loaded = tracked
        .iter()
        .filter(|handle| {
            matches!(
                asset_server.get_load_state(handle.id()),
                Some(LoadState::Loaded)
            )
        })
        .count();

    loading_progress.percent = progress::percentage(loaded, tracked.len());

    if loading_progress.percent >= 100.0 {
        println!("✓ All scene assets loaded successfully");
    }
}
