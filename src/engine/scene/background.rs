use bevy::prelude::*;
use rand::Rng;

use crate::constants::scene_settings::*;
use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::scene::conveyor::{Conveyor, JitterFlags, apply_spawn_jitter};

/// Live tuning parameters for the animated background, edited at runtime
/// by the scene tuner panel.
#[derive(Resource, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub lamp_count: usize,
    pub lamp_speed: f32,
    pub tree_count: usize,
    pub tree_speed: f32,
    pub far_tree_count: usize,
    pub far_tree_speed: f32,
    pub rock_count: usize,
    pub rock_speed: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            lamp_count: LAMPS_NB,
            lamp_speed: LAMPS_SPEED,
            tree_count: TREES_NB,
            tree_speed: TREES_SPEED,
            far_tree_count: FAR_TREES_NB,
            far_tree_speed: FAR_TREES_SPEED,
            rock_count: ROCKS_NB,
            rock_speed: ROCKS_SPEED,
        }
    }
}

/// Animated background prop categories, each with its own conveyor lane.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropCategory {
    Lamp,
    Tree,
    FarTree,
    Rock,
}

impl PropCategory {
    pub const ALL: [PropCategory; 4] = [
        PropCategory::Lamp,
        PropCategory::Tree,
        PropCategory::FarTree,
        PropCategory::Rock,
    ];

    /// Fixed lane depth (z) of this category.
    pub fn depth(&self) -> f32 {
        match self {
            PropCategory::Lamp => LAMPS_DEPTH,
            PropCategory::Tree => TREES_DEPTH,
            PropCategory::FarTree => FAR_TREES_DEPTH,
            PropCategory::Rock => ROCKS_DEPTH,
        }
    }

    pub fn base_scale(&self) -> f32 {
        match self {
            PropCategory::Lamp => LAMP_SCALE,
            PropCategory::Tree => TREE_SCALE,
            PropCategory::FarTree => FAR_TREE_SCALE,
            PropCategory::Rock => ROCK_SCALE,
        }
    }

    /// Trees vary in placement and size, rocks in size only, lamps stay
    /// exactly on their regular grid.
    pub fn jitter(&self) -> JitterFlags {
        match self {
            PropCategory::Lamp => JitterFlags::default(),
            PropCategory::Tree | PropCategory::FarTree => JitterFlags {
                position: true,
                scale: true,
            },
            PropCategory::Rock => JitterFlags {
                position: false,
                scale: true,
            },
        }
    }

    pub fn count(&self, config: &SceneConfig) -> usize {
        match self {
            PropCategory::Lamp => config.lamp_count,
            PropCategory::Tree => config.tree_count,
            PropCategory::FarTree => config.far_tree_count,
            PropCategory::Rock => config.rock_count,
        }
    }

    pub fn speed(&self, config: &SceneConfig) -> f32 {
        match self {
            PropCategory::Lamp => config.lamp_speed,
            PropCategory::Tree => config.tree_speed,
            PropCategory::FarTree => config.far_tree_speed,
            PropCategory::Rock => config.rock_speed,
        }
    }

    pub fn scene_handle(&self, assets: &SceneAssets) -> Handle<Scene> {
        match self {
            PropCategory::Lamp => assets.lamp_post.clone(),
            PropCategory::Tree | PropCategory::FarTree => assets.spruce_tree.clone(),
            PropCategory::Rock => assets.rock.clone(),
        }
    }
}

/// Base x of instance `index` of `count`: evenly spaced across the full
/// conveyor range, starting at the lower bound.
pub fn base_x(index: usize, count: usize) -> f32 {
    -OFFSET_X + index as f32 / count as f32 * 2.0 * OFFSET_X
}

fn spawn_category(
    commands: &mut Commands,
    category: PropCategory,
    config: &SceneConfig,
    assets: &SceneAssets,
    rng: &mut impl Rng,
) {
    let count = category.count(config);
    let speed = category.speed(config);
    let scene = category.scene_handle(assets);

    for index in 0..count {
        let mut transform =
            Transform::from_xyz(base_x(index, count), GROUND_Y, category.depth())
                .with_scale(Vec3::splat(category.base_scale()));
        apply_spawn_jitter(&mut transform, category.jitter(), rng);

        commands.spawn((
            category,
            Conveyor { speed },
            SceneRoot(scene.clone()),
            transform,
        ));
    }
}

/// Keeps the spawned background in step with the configuration. A count
/// change re-derives that category (fresh instances, fresh jitter); a
/// speed change mutates the existing conveyors in place so instance
/// identity and jitter survive.
pub fn reconcile_background(
    mut commands: Commands,
    config: Res<SceneConfig>,
    assets: Res<SceneAssets>,
    mut spawned: Local<Option<SceneConfig>>,
    mut riders: Query<(Entity, &PropCategory, &mut Conveyor)>,
) {
    let mut rng = rand::thread_rng();

    let Some(previous) = *spawned else {
        for category in PropCategory::ALL {
            spawn_category(&mut commands, category, &config, &assets, &mut rng);
        }
        *spawned = Some(*config);
        return;
    };

    if previous == *config {
        return;
    }

    for category in PropCategory::ALL {
        if category.count(&previous) != category.count(&config) {
            for (entity, rider_category, _) in &riders {
                if *rider_category == category {
                    commands.entity(entity).despawn();
                }
            }
            spawn_category(&mut commands, category, &config, &assets, &mut rng);
        } else if category.speed(&previous) != category.speed(&config) {
            let speed = category.speed(&config);
            for (_, rider_category, mut conveyor) in &mut riders {
                if *rider_category == category {
                    conveyor.speed = speed;
                }
            }
        }
    }

    *spawned = Some(*config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(SceneAssets::default())
            .insert_resource(SceneConfig::default())
            .add_systems(Update, reconcile_background);
        app
    }

    fn category_entities(app: &mut App, category: PropCategory) -> Vec<Entity> {
        let mut query = app.world_mut().query::<(Entity, &PropCategory)>();
        query
            .iter(app.world())
            .filter(|(_, c)| **c == category)
            .map(|(e, _)| e)
            .collect()
    }

    fn category_positions(app: &mut App, category: PropCategory) -> Vec<Vec3> {
        let mut query = app.world_mut().query::<(&PropCategory, &Transform)>();
        let mut positions: Vec<Vec3> = query
            .iter(app.world())
            .filter(|(c, _)| **c == category)
            .map(|(_, t)| t.translation)
            .collect();
        positions.sort_by(|a, b| a.x.total_cmp(&b.x));
        positions
    }

    #[test]
    fn base_spacing_is_even_across_the_range() {
        assert_eq!(base_x(0, 10), -20.0);
        assert_eq!(base_x(5, 10), 0.0);
        let spacing = base_x(1, 16) - base_x(0, 16);
        assert!((spacing - 2.0 * OFFSET_X / 16.0).abs() < 1e-6);
    }

    #[test]
    fn spawn_creates_exactly_the_configured_counts() {
        let mut app = test_app();
        app.update();
        assert_eq!(category_entities(&mut app, PropCategory::Lamp).len(), LAMPS_NB);
        assert_eq!(category_entities(&mut app, PropCategory::Tree).len(), TREES_NB);
        assert_eq!(
            category_entities(&mut app, PropCategory::FarTree).len(),
            FAR_TREES_NB
        );
        assert_eq!(category_entities(&mut app, PropCategory::Rock).len(), ROCKS_NB);
    }

    #[test]
    fn lamps_sit_exactly_on_their_grid() {
        let mut app = test_app();
        app.update();
        let positions = category_positions(&mut app, PropCategory::Lamp);
        for (index, position) in positions.iter().enumerate() {
            assert_eq!(position.x, base_x(index, LAMPS_NB));
            assert_eq!(position.y, GROUND_Y);
            assert_eq!(position.z, LAMPS_DEPTH);
        }
    }

    #[test]
    fn tree_jitter_stays_within_bounds_of_the_grid() {
        let mut app = test_app();
        app.update();
        let positions = category_positions(&mut app, PropCategory::Tree);
        for (index, position) in positions.iter().enumerate() {
            assert!((position.x - base_x(index, TREES_NB)).abs() <= 0.5);
            assert!((position.z - TREES_DEPTH).abs() <= 0.5);
            assert_eq!(position.y, GROUND_Y);
        }
    }

    #[test]
    fn speed_edit_preserves_instances_and_their_jitter() {
        let mut app = test_app();
        app.update();

        let before_entities: HashSet<Entity> =
            category_entities(&mut app, PropCategory::Tree).into_iter().collect();
        let before_positions = category_positions(&mut app, PropCategory::Tree);

        app.world_mut().resource_mut::<SceneConfig>().tree_speed = 1.5;
        app.update();

        let after_entities: HashSet<Entity> =
            category_entities(&mut app, PropCategory::Tree).into_iter().collect();
        assert_eq!(before_entities, after_entities);
        assert_eq!(before_positions, category_positions(&mut app, PropCategory::Tree));

        let mut query = app.world_mut().query::<(&PropCategory, &Conveyor)>();
        for (category, conveyor) in query.iter(app.world()) {
            if *category == PropCategory::Tree {
                assert_eq!(conveyor.speed, 1.5);
            }
        }
    }

    #[test]
    fn count_edit_rederives_only_that_category() {
        let mut app = test_app();
        app.update();

        let lamps_before: HashSet<Entity> =
            category_entities(&mut app, PropCategory::Lamp).into_iter().collect();

        app.world_mut().resource_mut::<SceneConfig>().rock_count = 20;
        app.update();

        assert_eq!(category_entities(&mut app, PropCategory::Rock).len(), 20);
        let lamps_after: HashSet<Entity> =
            category_entities(&mut app, PropCategory::Lamp).into_iter().collect();
        assert_eq!(lamps_before, lamps_after);
    }

    #[test]
    fn unchanged_config_is_a_no_op() {
        let mut app = test_app();
        app.update();
        let before: HashSet<Entity> =
            category_entities(&mut app, PropCategory::Tree).into_iter().collect();
        app.update();
        let after: HashSet<Entity> =
            category_entities(&mut app, PropCategory::Tree).into_iter().collect();
        assert_eq!(before, after);
    }
}
