//! Camera, lighting and post-processing tuning constants.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

pub const CAMERA_START: Vec3 = Vec3::new(-5.0, 1.0, 6.0);
pub const CAMERA_FOV_DEGREES: f32 = 25.0;

pub const ORBIT_AZIMUTH_LIMIT: f32 = FRAC_PI_4;
pub const ORBIT_ELEVATION_MIN: f32 = 0.0;
pub const ORBIT_ELEVATION_MAX: f32 = FRAC_PI_2;
pub const ORBIT_DISTANCE_MIN: f32 = 2.0;
pub const ORBIT_DISTANCE_MAX: f32 = 15.0;

pub const FOG_COLOUR: Color = Color::srgb(0.086, 0.627, 0.294);
pub const FOG_START: f32 = 12.0;
pub const FOG_END: f32 = 30.0;

/// Luminance threshold of 1.0 keeps bloom on emissive surfaces only.
pub const BLOOM_THRESHOLD: f32 = 1.0;
pub const BLOOM_INTENSITY: f32 = 0.42;
pub const BLOOM_RADIUS: f32 = 0.72;

pub const AMBIENT_BRIGHTNESS: f32 = 160.0;
pub const SUN_COLOUR: Color = Color::srgb(1.0, 0.82, 0.63);
pub const SUN_ILLUMINANCE: f32 = 6_000.0;
pub const ENVIRONMENT_INTENSITY: f32 = 700.0;

pub const CONTACT_SHADOW_SIZE: f32 = 16.0;
pub const CONTACT_SHADOW_OPACITY: f32 = 0.42;
