use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::constants::scene_settings::GROUND_Y;
use crate::engine::assets::scene_assets::SceneAssets;

/// The two static characters at the centre of the scene. Composed once on
/// entering the live scene and never re-derived.
pub fn spawn_characters(mut commands: Commands, assets: Res<SceneAssets>) {
    commands.spawn((
        Name::new("Reaper"),
        SceneRoot(assets.reaper.clone()),
        Transform::from_xyz(0.9, GROUND_Y, 0.0)
            .with_rotation(Quat::from_rotation_y(-FRAC_PI_2))
            .with_scale(Vec3::splat(0.5)),
    ));

    commands.spawn((
        Name::new("Korrigan"),
        SceneRoot(assets.korrigan.clone()),
        Transform::from_xyz(-1.0, GROUND_Y - 0.02, 0.0)
            .with_rotation(Quat::from_rotation_y(-FRAC_PI_2))
            .with_scale(Vec3::splat(1.5)),
    ));
}
