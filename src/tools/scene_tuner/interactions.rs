use bevy::prelude::*;

use super::state::*;
use crate::engine::scene::background::SceneConfig;

// Chevron icon toggles collapse state
pub fn collapse_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<TunerCollapseButton>),
    >,
    mut state: ResMut<SceneTunerUiState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                state.collapsed = !state.collapsed;
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// Stepper buttons move their control by one step, clamped to its range
pub fn step_button_interaction(
    mut q: Query<
        (&Interaction, &TunerStepButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut config: ResMut<SceneConfig>,
) {
    for (interaction, step, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                let control = &TUNER_CONTROLS[step.control];
                let value = control.stepped(control.field.get(&config), step.sign);
                control.field.set(&mut config, value);
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}
