use bevy::prelude::*;

use crate::engine::scene::background::SceneConfig;

// Resources
#[derive(Resource)]
pub struct SceneTunerUiState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}
impl Default for SceneTunerUiState {
    fn default() -> Self {
        Self {
            collapsed: false,
            open_width: 260.0,
            closed_width: 32.0,
        }
    }
}

/// Which `SceneConfig` field a control row edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunerField {
    LampCount,
    LampSpeed,
    TreeCount,
    TreeSpeed,
    FarTreeCount,
    FarTreeSpeed,
    RockCount,
    RockSpeed,
}

/// A named numeric control: live value plus its range and step.
pub struct TunerControl {
    pub label: &'static str,
    pub field: TunerField,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

pub const TUNER_CONTROLS: [TunerControl; 8] = [
    TunerControl { label: "lamps", field: TunerField::LampCount, min: 1.0, max: 100.0, step: 1.0 },
    TunerControl { label: "lamps speed", field: TunerField::LampSpeed, min: 0.1, max: 2.0, step: 0.05 },
    TunerControl { label: "trees", field: TunerField::TreeCount, min: 1.0, max: 100.0, step: 1.0 },
    TunerControl { label: "trees speed", field: TunerField::TreeSpeed, min: 0.1, max: 2.0, step: 0.05 },
    TunerControl { label: "far trees", field: TunerField::FarTreeCount, min: 1.0, max: 100.0, step: 1.0 },
    TunerControl { label: "far trees speed", field: TunerField::FarTreeSpeed, min: 0.1, max: 2.0, step: 0.01 },
    TunerControl { label: "rocks", field: TunerField::RockCount, min: 1.0, max: 100.0, step: 1.0 },
    TunerControl { label: "rocks speed", field: TunerField::RockSpeed, min: 0.1, max: 2.0, step: 0.05 },
];

impl TunerField {
    pub fn get(&self, config: &SceneConfig) -> f32 {
        match self {
            TunerField::LampCount => config.lamp_count as f32,
            TunerField::LampSpeed => config.lamp_speed,
            TunerField::TreeCount => config.tree_count as f32,
            TunerField::TreeSpeed => config.tree_speed,
            TunerField::FarTreeCount => config.far_tree_count as f32,
            TunerField::FarTreeSpeed => config.far_tree_speed,
            TunerField::RockCount => config.rock_count as f32,
            TunerField::RockSpeed => config.rock_speed,
        }
    }

    pub fn set(&self, config: &mut SceneConfig, value: f32) {
        match self {
            TunerField::LampCount => config.lamp_count = value.round() as usize,
            TunerField::LampSpeed => config.lamp_speed = value,
            TunerField::TreeCount => config.tree_count = value.round() as usize,
            TunerField::TreeSpeed => config.tree_speed = value,
            TunerField::FarTreeCount => config.far_tree_count = value.round() as usize,
            TunerField::FarTreeSpeed => config.far_tree_speed = value,
            TunerField::RockCount => config.rock_count = value.round() as usize,
            TunerField::RockSpeed => config.rock_speed = value,
        }
    }
}

impl TunerControl {
    /// One stepper press: move by one step in `sign` direction, clamped to
    /// the control's range.
    pub fn stepped(&self, value: f32, sign: f32) -> f32 {
        (value + sign * self.step).clamp(self.min, self.max)
    }

    pub fn format(&self, value: f32) -> String {
        if self.step >= 1.0 {
            format!("{value:.0}")
        } else {
            format!("{value:.2}")
        }
    }
}

// Components
#[derive(Component)]
pub struct TunerRoot;
#[derive(Component)]
pub struct TunerBody;
#[derive(Component)]
pub struct TunerHeaderNode;
#[derive(Component)]
pub struct TunerTitleText;
#[derive(Component)]
pub struct TunerCollapseButton;
#[derive(Component)]
pub struct TunerCollapseLabel;

/// `-` / `+` stepper button; `control` indexes `TUNER_CONTROLS`.
#[derive(Component)]
pub struct TunerStepButton {
    pub control: usize,
    pub sign: f32,
}

/// Live value text of a control row.
#[derive(Component)]
pub struct TunerValueText {
    pub control: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_clamps_to_the_control_range() {
        let speed = &TUNER_CONTROLS[1];
        assert_eq!(speed.stepped(2.0, 1.0), 2.0);
        assert_eq!(speed.stepped(0.1, -1.0), 0.1);
        assert!((speed.stepped(0.8, 1.0) - 0.85).abs() < 1e-6);
    }

    #[test]
    fn count_fields_round_trip_through_f32() {
        let mut config = SceneConfig::default();
        TunerField::RockCount.set(&mut config, 7.0);
        assert_eq!(config.rock_count, 7);
        assert_eq!(TunerField::RockCount.get(&config), 7.0);
    }

    #[test]
    fn counts_format_as_integers_and_speeds_with_decimals() {
        assert_eq!(TUNER_CONTROLS[0].format(10.0), "10");
        assert_eq!(TUNER_CONTROLS[1].format(0.8), "0.80");
    }
}
