use bevy::prelude::*;
use std::f32::consts::FRAC_PI_4;

use crate::constants::render_settings::{
    AMBIENT_BRIGHTNESS, CONTACT_SHADOW_OPACITY, CONTACT_SHADOW_SIZE, ENVIRONMENT_INTENSITY,
    SUN_COLOUR, SUN_ILLUMINANCE,
};
use crate::constants::scene_settings::GROUND_Y;
use crate::engine::assets::scene_assets::SceneAssets;

/// Static lighting and atmosphere, composed once on entering the live
/// scene: low ambient fill, a warm low sun, the sunset environment map on
/// the camera, and the ground contact-shadow decal.
pub fn spawn_environment(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cameras: Query<Entity, With<Camera3d>>,
) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            color: SUN_COLOUR,
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, 1.0, -FRAC_PI_4)),
    ));

    for camera in &cameras {
        commands.entity(camera).insert(EnvironmentMapLight {
            diffuse_map: assets.environment_diffuse.clone(),
            specular_map: assets.environment_specular.clone(),
            intensity: ENVIRONMENT_INTENSITY,
            ..default()
        });
    }

    spawn_contact_shadow(&mut commands, &mut meshes, &mut materials);
}

/// A soft dark translucent quad standing in for baked contact shadows
/// under the characters. Sits just above the ground plane to avoid
/// z-fighting.
fn spawn_contact_shadow(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Name::new("ContactShadow"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(CONTACT_SHADOW_SIZE, CONTACT_SHADOW_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 0.0, 0.0, CONTACT_SHADOW_OPACITY),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, GROUND_Y + 0.01, 0.0),
    ));
}
