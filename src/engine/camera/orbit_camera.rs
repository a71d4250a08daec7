use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::constants::render_settings::{
    CAMERA_START, ORBIT_AZIMUTH_LIMIT, ORBIT_DISTANCE_MAX, ORBIT_DISTANCE_MIN,
    ORBIT_ELEVATION_MAX, ORBIT_ELEVATION_MIN,
};

const YAW_SENSITIVITY: f32 = 0.0035;
const PITCH_SENSITIVITY: f32 = 0.0030;

/// Orbit state about the scene origin. Yaw is the azimuth, pitch the
/// elevation above the horizon; both stay inside the scene's viewing cone.
#[derive(Resource)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let distance = CAMERA_START.length();
        Self {
            yaw: clamp_azimuth(CAMERA_START.x.atan2(CAMERA_START.z)),
            pitch: clamp_elevation((CAMERA_START.y / distance).asin()),
            distance: clamp_distance(distance),
        }
    }
}

impl OrbitCamera {
    /// Camera transform for the current orbit state, looking at the
    /// origin.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        Transform::from_translation(rotation * (Vec3::Z * self.distance))
            .looking_at(Vec3::ZERO, Vec3::Y)
    }
}

pub fn clamp_azimuth(yaw: f32) -> f32 {
    yaw.clamp(-ORBIT_AZIMUTH_LIMIT, ORBIT_AZIMUTH_LIMIT)
}

pub fn clamp_elevation(pitch: f32) -> f32 {
    pitch.clamp(ORBIT_ELEVATION_MIN, ORBIT_ELEVATION_MAX)
}

pub fn clamp_distance(distance: f32) -> f32 {
    distance.clamp(ORBIT_DISTANCE_MIN, ORBIT_DISTANCE_MAX)
}

pub fn camera_controller(
    mut cameras: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse motion with left click (orbit)
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw = clamp_azimuth(orbit.yaw - mouse_delta.x * YAW_SENSITIVITY);
        orbit.pitch = clamp_elevation(orbit.pitch + mouse_delta.y * PITCH_SENSITIVITY);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Dolly towards or away from the focus point
    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = (orbit.distance * 0.15).clamp(0.2, 2.0);
        orbit.distance = clamp_distance(orbit.distance - scroll_accum * dolly_speed);
    }

    *transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn default_pose_matches_the_spawn_position() {
        let camera = OrbitCamera::default();
        let translation = camera.transform().translation;
        assert!((translation - CAMERA_START).length() < 1e-3);
    }

    #[test]
    fn azimuth_is_clamped_to_a_quarter_turn_cone() {
        assert_eq!(clamp_azimuth(2.0), FRAC_PI_4);
        assert_eq!(clamp_azimuth(-2.0), -FRAC_PI_4);
        assert_eq!(clamp_azimuth(0.3), 0.3);
    }

    #[test]
    fn elevation_never_drops_below_the_horizon() {
        assert_eq!(clamp_elevation(-0.5), 0.0);
        assert_eq!(clamp_elevation(2.0), FRAC_PI_2);
    }

    #[test]
    fn distance_stays_inside_the_dolly_range() {
        assert_eq!(clamp_distance(0.5), ORBIT_DISTANCE_MIN);
        assert_eq!(clamp_distance(40.0), ORBIT_DISTANCE_MAX);
        assert_eq!(clamp_distance(7.0), 7.0);
    }

    #[test]
    fn transform_preserves_the_orbit_distance() {
        let camera = OrbitCamera {
            yaw: 0.2,
            pitch: 0.4,
            distance: 9.0,
        };
        assert!((camera.transform().translation.length() - 9.0).abs() < 1e-4);
    }
}
