use bevy::prelude::*;

use super::state::*;
use crate::engine::scene::background::SceneConfig;

// Spawns the Scene Tuner panel with header and one stepper row per control
pub fn spawn_scene_tuner_ui(
    mut commands: Commands,
    state: Res<SceneTunerUiState>,
    config: Res<SceneConfig>,
) {
    let width = if state.collapsed { state.closed_width } else { state.open_width };
    let body_display = if state.collapsed { Display::None } else { Display::Flex };

    commands
        .spawn((
            TunerRoot,
            Name::new("SceneTunerPanel"),
            BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.92)),
            Node {
                width: Val::Px(width),
                min_width: Val::Px(0.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                justify_content: JustifyContent::FlexStart,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            let pad = if state.collapsed { 4.0 } else { 12.0 };

            parent
                .spawn((
                    TunerHeaderNode,
                    Name::new("Header"),
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(pad)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: if state.collapsed {
                            JustifyContent::FlexEnd
                        } else {
                            JustifyContent::SpaceBetween
                        },
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        TunerTitleText,
                        Name::new("Title"),
                        Text::new("Scene Tuner"),
                        TextFont { font_size: 18.0, ..default() },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        Node {
                            display: if state.collapsed { Display::None } else { Display::Flex },
                            ..default()
                        },
                    ));

                    let chevron = if state.collapsed { "<" } else { ">" };
                    header
                        .spawn((
                            TunerCollapseButton,
                            Name::new("CollapseButton"),
                            Button,
                            BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            Node {
                                width: Val::Px(24.0),
                                height: Val::Px(24.0),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn_parent| {
                            btn_parent.spawn((
                                TunerCollapseLabel,
                                Text::new(chevron),
                                TextFont { font_size: 18.0, ..default() },
                                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                            ));
                        });
                });

            parent
                .spawn((
                    TunerBody,
                    Name::new("Body"),
                    BackgroundColor(Color::srgba(0.12, 0.13, 0.15, 0.92)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        row_gap: Val::Px(8.0),
                        display: body_display,
                        flex_direction: FlexDirection::Column,
                        overflow: Overflow::clip_y(),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    for (index, control) in TUNER_CONTROLS.iter().enumerate() {
                        spawn_control_row(body, index, control, &config);
                    }
                });
        });
}

fn spawn_control_row(
    body: &mut ChildSpawnerCommands,
    index: usize,
    control: &TunerControl,
    config: &SceneConfig,
) {
    body.spawn((
        Name::new(control.label),
        Node {
            width: Val::Percent(100.0),
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::SpaceBetween,
            column_gap: Val::Px(6.0),
            ..default()
        },
    ))
    .with_children(|row| {
        row.spawn((
            Text::new(control.label),
            TextFont { font_size: 14.0, ..default() },
            TextColor(Color::srgb(0.8, 0.82, 0.85)),
        ));

        spawn_step_button(row, index, -1.0, "-");

        row.spawn((
            TunerValueText { control: index },
            Text::new(control.format(control.field.get(config))),
            TextFont { font_size: 14.0, ..default() },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
        ));

        spawn_step_button(row, index, 1.0, "+");
    });
}

fn spawn_step_button(row: &mut ChildSpawnerCommands, control: usize, sign: f32, label: &str) {
    row.spawn((
        TunerStepButton { control, sign },
        Button,
        BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
        Node {
            width: Val::Px(22.0),
            height: Val::Px(22.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new(label),
            TextFont { font_size: 14.0, ..default() },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
        ));
    });
}

// Applies collapse state to panel width, body visibility and chevron
pub fn apply_collapse_state(
    state: Res<SceneTunerUiState>,
    mut roots: Query<&mut Node, With<TunerRoot>>,
    mut bodies: Query<&mut Node, (With<TunerBody>, Without<TunerRoot>)>,
    mut titles: Query<&mut Node, (With<TunerTitleText>, Without<TunerRoot>, Without<TunerBody>)>,
    mut chevrons: Query<&mut Text, With<TunerCollapseLabel>>,
) {
    if !state.is_changed() {
        return;
    }

    for mut node in &mut roots {
        node.width = Val::Px(if state.collapsed { state.closed_width } else { state.open_width });
    }
    for mut node in &mut bodies {
        node.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    for mut node in &mut titles {
        node.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    for mut text in &mut chevrons {
        text.0 = if state.collapsed { "<" } else { ">" }.to_string();
    }
}

// Keeps each row's value text in step with the live configuration
pub fn reflect_value_texts(
    config: Res<SceneConfig>,
    mut texts: Query<(&TunerValueText, &mut Text)>,
) {
    if !config.is_changed() {
        return;
    }

    for (value_text, mut text) in &mut texts {
        let control = &TUNER_CONTROLS[value_text.control];
        text.0 = control.format(control.field.get(&config));
    }
}
