use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;

const MANIFEST_PATH: &str = "scene_manifest.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

/// Start the loading process.
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Fan out asset requests once the manifest JSON has parsed.
pub fn load_manifest_assets(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut assets: ResMut<SceneAssets>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };
    let Some(manifest) = manifests.get(handle) else {
        return;
    };

    println!("✓ Scene manifest loaded successfully");
    println!("  Models: lamp post, spruce tree, rock, two characters");
    println!(
        "  Environment: {} / {}",
        manifest.environment.diffuse_map, manifest.environment.specular_map
    );
    println!("  Ambient track: {}", manifest.ambient_track);

    assets.lamp_post = load_model(&asset_server, &manifest.models.lamp_post);
    assets.spruce_tree = load_model(&asset_server, &manifest.models.spruce_tree);
    assets.rock = load_model(&asset_server, &manifest.models.rock);
    assets.reaper = load_model(&asset_server, &manifest.models.reaper);
    assets.korrigan = load_model(&asset_server, &manifest.models.korrigan);
    assets.environment_diffuse = asset_server.load(manifest.environment.diffuse_map.clone());
    assets.environment_specular = asset_server.load(manifest.environment.specular_map.clone());
    assets.ambient_track = asset_server.load(manifest.ambient_track.clone());

    loading_progress.manifest_loaded = true;
}

fn load_model(asset_server: &AssetServer, path: &str) -> Handle<Scene> {
    asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.to_owned()))
}
