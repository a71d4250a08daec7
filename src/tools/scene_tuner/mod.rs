//! Runtime tuning panel for the animated background.
//!
//! A collapsible side panel of named numeric controls, one stepper row per
//! prop count and speed. Edits land on [`SceneConfig`] and the background
//! reconciler picks them up the same frame: count edits re-derive the
//! category, speed edits retarget the existing conveyors.
//!
//! [`SceneConfig`]: crate::engine::scene::background::SceneConfig

/// UI button interactions for the tuner panel.
pub mod interactions;

/// Control definitions, UI state and marker components.
pub mod state;

/// UI spawning and update systems for the tuner panel.
pub mod ui;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use interactions::{collapse_button_interaction, step_button_interaction};
use state::SceneTunerUiState;
use ui::{apply_collapse_state, reflect_value_texts, spawn_scene_tuner_ui};

// Registers the Scene Tuner panel, its state, and its systems.
pub struct SceneTunerPlugin;

impl Plugin for SceneTunerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneTunerUiState>()
            .add_systems(OnEnter(AppState::Running), spawn_scene_tuner_ui)
            .add_systems(
                Update,
                (
                    collapse_button_interaction,
                    apply_collapse_state,
                    step_button_interaction,
                    reflect_value_texts,
                )
                    .run_if(in_state(AppState::Running)),
            );
    }
}
