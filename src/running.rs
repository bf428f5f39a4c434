//! Running: shared distance and speed formulas with a speed-driven calorie burn.

use crate::models::ActivityKind;
use crate::training::{Training, TrainingBase, M_IN_KM, MIN_IN_H};

/// Speed multiplier in the running calorie formula
const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
/// Speed shift in the running calorie formula
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Training: running
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub fn new(base: TrainingBase) -> Self {
        Self { base }
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn get_spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_running_metrics() {
        let run = Running::new(TrainingBase::new(15000.0, 1.0, 75.0));

        assert!(approx(run.get_distance(), 9.75));
        assert!(approx(run.get_mean_speed(), 9.75));
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!(approx(run.get_spent_calories(), 699.75));
    }

    #[test]
    fn test_running_longer_duration_lowers_speed() {
        let run = Running::new(TrainingBase::new(15000.0, 1.5, 75.0));

        assert!(approx(run.get_mean_speed(), 6.5));
        assert!(approx(run.get_spent_calories(), (18.0 * 6.5 - 20.0) * 75.0 / 1000.0 * 1.5 * 60.0));
    }

    #[test]
    fn test_running_summary() {
        let info = Running::new(TrainingBase::new(15000.0, 1.0, 75.0)).show_training_info();
        assert_eq!(
            info.get_message(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }
}
