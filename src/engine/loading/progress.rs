use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub percent: f32,
}

impl LoadingProgress {
    /// The start control is armed only at exactly 100%.
    pub fn is_complete(&self) -> bool {
        self.manifest_loaded && self.percent >= 100.0
    }
}

/// Fraction of tracked handles that have finished loading, as 0-100.
pub fn percentage(loaded: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    loaded as f32 / total as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_reaches_exactly_one_hundred() {
        assert_eq!(percentage(8, 8), 100.0);
        assert_eq!(percentage(0, 8), 0.0);
        assert!(percentage(7, 8) < 100.0);
    }

    #[test]
    fn empty_tracking_set_reports_zero() {
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn gate_requires_full_progress() {
        let mut progress = LoadingProgress {
            manifest_loaded: true,
            percent: 99.0,
        };
        assert!(!progress.is_complete());
        progress.percent = 100.0;
        assert!(progress.is_complete());
    }

    #[test]
    fn gate_requires_manifest() {
        let progress = LoadingProgress {
            manifest_loaded: false,
            percent: 100.0,
        };
        assert!(!progress.is_complete());
    }
}
