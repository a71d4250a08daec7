// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::core_pipeline::bloom::{Bloom, BloomPrefilter};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::constants::render_settings::{
    BLOOM_INTENSITY, BLOOM_RADIUS, BLOOM_THRESHOLD, CAMERA_FOV_DEGREES, CAMERA_START,
    FOG_COLOUR, FOG_END, FOG_START,
};
use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_ready};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::asset_tracker::check_asset_loading;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_assets, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::start_screen::{
    arm_start_button, despawn_start_screen, spawn_start_screen, start_button_system,
    update_progress_bar,
};
use crate::engine::scene::background::{SceneConfig, reconcile_background};
use crate::engine::scene::characters::spawn_characters;
use crate::engine::scene::conveyor::conveyor_system;
use crate::engine::scene::environment::spawn_environment;

// Crate tools modules
use crate::tools::scene_tuner::SceneTunerPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(SceneTunerPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<SceneAssets>()
        .init_resource::<SceneConfig>()
        .init_resource::<OrbitCamera>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, spawn_start_screen, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_assets,
                check_asset_loading,
                update_progress_bar,
                transition_to_ready,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Ready), arm_start_button)
        .add_systems(
            Update,
            start_button_system.run_if(in_state(AppState::Ready)),
        )
        // Scene content is composed only once the session starts, so no
        // animation or rendering cost is paid pre-start.
        .add_systems(
            OnEnter(AppState::Running),
            (despawn_start_screen, spawn_characters, spawn_environment),
        )
        .add_systems(
            Update,
            (reconcile_background, conveyor_system, camera_controller)
                .run_if(in_state(AppState::Running)),
        );

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_viewport_camera(&mut commands);
}

/// HDR orbit camera with bloom and the grove's green distance fog. The
/// environment map light joins it once the session starts.
fn spawn_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        Bloom {
            intensity: BLOOM_INTENSITY,
            low_frequency_boost: BLOOM_RADIUS,
            prefilter: BloomPrefilter {
                threshold: BLOOM_THRESHOLD,
                threshold_softness: 0.2,
            },
            ..Bloom::NATURAL
        },
        DistanceFog {
            color: FOG_COLOUR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
