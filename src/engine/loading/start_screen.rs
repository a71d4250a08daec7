use bevy::prelude::*;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;

const BUTTON_DISABLED_COLOUR: Color = Color::srgb(0.22, 0.24, 0.28);
const BUTTON_ARMED_COLOUR: Color = Color::srgb(0.13, 0.52, 0.27);

// Components
#[derive(Component)]
pub struct StartScreenRoot;
#[derive(Component)]
pub struct ProgressBarFill;
#[derive(Component)]
pub struct StartButton;

/// Spawns the loading screen: progress bar along the top, title board with
/// the Start control in the middle.
pub fn spawn_start_screen(mut commands: Commands) {
    commands
        .spawn((
            StartScreenRoot,
            Name::new("StartScreen"),
            BackgroundColor(Color::srgba(0.05, 0.08, 0.06, 0.92)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("ProgressBar"),
                    BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.12)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(4.0),
                        position_type: PositionType::Absolute,
                        top: Val::Px(0.0),
                        left: Val::Px(0.0),
                        ..default()
                    },
                ))
                .with_children(|bar| {
                    bar.spawn((
                        ProgressBarFill,
                        Name::new("ProgressBarFill"),
                        BackgroundColor(Color::srgb(0.086, 0.627, 0.294)),
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    ));
                });

            parent
                .spawn((
                    Name::new("Board"),
                    BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
                    Node {
                        padding: UiRect::axes(Val::Px(48.0), Val::Px(32.0)),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(24.0),
                        ..default()
                    },
                ))
                .with_children(|board| {
                    board.spawn((
                        Name::new("Title"),
                        Text::new("Please help me!"),
                        TextFont {
                            font_size: 32.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));

                    board
                        .spawn((
                            StartButton,
                            Name::new("StartButton"),
                            Button,
                            BackgroundColor(BUTTON_DISABLED_COLOUR),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            Node {
                                width: Val::Px(160.0),
                                height: Val::Px(44.0),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new("Start"),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                            ));
                        });
                });
        });
}

/// Keeps the bar fill width in step with the loading percentage.
pub fn update_progress_bar(
    loading_progress: Res<LoadingProgress>,
    mut fills: Query<&mut Node, With<ProgressBarFill>>,
) {
    for mut node in &mut fills {
        node.width = Val::Percent(loading_progress.percent);
    }
}

/// Restyles the Start control once the gate precondition holds. The press
/// handler only runs in `Ready`, so before this the control is inert.
pub fn arm_start_button(mut buttons: Query<&mut BackgroundColor, With<StartButton>>) {
    for mut colour in &mut buttons {
        colour.0 = BUTTON_ARMED_COLOUR;
    }
}

/// First (and only possible) activation of the session gate: begin the
/// ambient track and enter the live scene. Audio is spawn-and-forget;
/// decode or device failures are reported by the audio backend and the
/// scene simply runs silent.
pub fn start_button_system(
    mut interactions: Query<&Interaction, (Changed<Interaction>, With<StartButton>)>,
    assets: Res<SceneAssets>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for interaction in &mut interactions {
        if *interaction == Interaction::Pressed {
            println!("→ Start pressed, transitioning to Running state");
            commands.spawn((
                AudioPlayer::new(assets.ambient_track.clone()),
                PlaybackSettings::DESPAWN,
            ));
            next_state.set(AppState::Running);
        }
    }
}

/// The screen never returns within a session, so the whole tree goes.
pub fn despawn_start_screen(
    mut commands: Commands,
    roots: Query<Entity, With<StartScreenRoot>>,
) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn armed_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.init_state::<AppState>();
        app.insert_resource(SceneAssets::default());
        app.add_systems(
            Update,
            start_button_system.run_if(in_state(AppState::Ready)),
        );
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Ready);
        app.update();
        app
    }

    fn current_state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    fn audio_player_count(app: &mut App) -> usize {
        let mut players = app.world_mut().query::<&AudioPlayer>();
        players.iter(app.world()).count()
    }

    #[test]
    fn first_activation_starts_audio_and_enters_the_scene() {
        let mut app = armed_app();
        assert_eq!(current_state(&app), AppState::Ready);

        app.world_mut()
            .spawn((StartButton, Button, Interaction::Pressed));
        app.update();
        app.update();

        assert_eq!(current_state(&app), AppState::Running);
        assert_eq!(audio_player_count(&mut app), 1);
    }

    #[test]
    fn pressing_again_after_start_does_not_restart_audio() {
        let mut app = armed_app();
        let button = app
            .world_mut()
            .spawn((StartButton, Button, Interaction::Pressed))
            .id();
        app.update();
        app.update();
        assert_eq!(current_state(&app), AppState::Running);

        // The press handler is Ready-scoped, so a second press is inert.
        app.world_mut()
            .entity_mut(button)
            .insert(Interaction::Pressed);
        app.update();
        app.update();

        assert_eq!(current_state(&app), AppState::Running);
        assert_eq!(audio_player_count(&mut app), 1);
    }
}
