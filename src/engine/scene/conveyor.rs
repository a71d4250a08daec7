use bevy::prelude::*;
use rand::Rng;

use crate::constants::scene_settings::{
    OFFSET_X, RANDOMIZER_STRENGTH_POSITION, RANDOMIZER_STRENGTH_SCALE,
};

/// Marks an entity as riding the conveyor. The speed is in world units per
/// second along +x.
#[derive(Component)]
pub struct Conveyor {
    pub speed: f32,
}

/// Which one-time jitter a prop category applies at spawn.
#[derive(Clone, Copy, Default)]
pub struct JitterFlags {
    pub position: bool,
    pub scale: bool,
}

/// One conveyor step. A hard reset to `-OFFSET_X` rather than a modulo
/// wrap: the overshoot is discarded, and the jump happens at the range
/// edge where it is off-camera.
pub fn advance(x: f32, speed: f32, delta: f32) -> f32 {
    let x = x + speed * delta;
    if x >= OFFSET_X { -OFFSET_X } else { x }
}

/// Advances every conveyor rider once per rendered frame.
pub fn conveyor_system(time: Res<Time>, mut riders: Query<(&Conveyor, &mut Transform)>) {
    for (conveyor, mut transform) in &mut riders {
        transform.translation.x = advance(transform.translation.x, conveyor.speed, time.delta_secs());
    }
}

/// Applies the one-time spawn jitter. Invoked exactly once when an
/// instance is created, never again for the instance's lifetime.
pub fn apply_spawn_jitter(transform: &mut Transform, flags: JitterFlags, rng: &mut impl Rng) {
    if flags.position {
        transform.translation.x += spread(rng, RANDOMIZER_STRENGTH_POSITION);
        transform.translation.z += spread(rng, RANDOMIZER_STRENGTH_POSITION);
    }
    if flags.scale {
        transform.scale.x += spread(rng, RANDOMIZER_STRENGTH_SCALE);
        transform.scale.y += spread(rng, RANDOMIZER_STRENGTH_SCALE);
        transform.scale.z += spread(rng, RANDOMIZER_STRENGTH_SCALE);
    }
}

/// Uniform random in `[-strength / 2, strength / 2)`.
fn spread(rng: &mut impl Rng, strength: f32) -> f32 {
    rng.gen_range(-strength / 2.0..strength / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn advance_moves_by_speed_times_delta() {
        assert_eq!(advance(0.0, 0.8, 0.5), 0.4);
        assert_eq!(advance(-3.0, 2.0, 1.0), -1.0);
    }

    #[test]
    fn reaching_the_upper_bound_resets_to_the_lower() {
        assert_eq!(advance(19.5, 1.0, 0.5), -OFFSET_X);
        // Overshoot is discarded, not carried.
        assert_eq!(advance(19.0, 100.0, 1.0), -OFFSET_X);
    }

    #[test]
    fn position_never_leaves_the_conveyor_range() {
        let mut x = -OFFSET_X;
        for _ in 0..10_000 {
            x = advance(x, 1.7, 0.016);
            assert!((-OFFSET_X..OFFSET_X).contains(&x), "x escaped: {x}");
        }
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        assert_eq!(advance(4.2, 0.8, 0.0), 4.2);
    }

    #[test]
    fn position_jitter_stays_within_half_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut transform = Transform::from_xyz(1.0, 0.0, -3.5);
            apply_spawn_jitter(
                &mut transform,
                JitterFlags {
                    position: true,
                    scale: false,
                },
                &mut rng,
            );
            assert!((transform.translation.x - 1.0).abs() <= 0.5);
            assert!((transform.translation.z + 3.5).abs() <= 0.5);
            assert_eq!(transform.translation.y, 0.0);
            assert_eq!(transform.scale, Vec3::ONE);
        }
    }

    #[test]
    fn scale_jitter_stays_within_half_spread_per_axis() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let mut transform = Transform::from_scale(Vec3::splat(0.1));
            apply_spawn_jitter(
                &mut transform,
                JitterFlags {
                    position: false,
                    scale: true,
                },
                &mut rng,
            );
            for axis in transform.scale.to_array() {
                assert!((axis - 0.1).abs() <= 0.21);
            }
            assert_eq!(transform.translation, Vec3::ZERO);
        }
    }

    #[test]
    fn disabled_jitter_leaves_the_transform_exact() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut transform = Transform::from_xyz(2.0, -1.0, 1.0).with_scale(Vec3::splat(0.5));
        apply_spawn_jitter(&mut transform, JitterFlags::default(), &mut rng);
        assert_eq!(transform.translation, Vec3::new(2.0, -1.0, 1.0));
        assert_eq!(transform.scale, Vec3::splat(0.5));
    }
}
