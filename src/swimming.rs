//! Swimming: stroke-based distance, pool-based speed.

use crate::models::ActivityKind;
use crate::training::{Training, TrainingBase, M_IN_KM};

/// Speed shift in the swimming calorie formula
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
/// Weight multiplier in the swimming calorie formula
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Training: swimming
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    /// Pool length in meters
    length_pool: f64,
    /// Number of pool lengths swum
    count_pool: f64,
}

impl Swimming {
    pub fn new(base: TrainingBase, length_pool: f64, count_pool: f64) -> Self {
        Self {
            base,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    const LEN_STEP: f64 = 1.38;

    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Speed comes from the pool laps, not from the stroke distance
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.base.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample() -> Swimming {
        Swimming::new(TrainingBase::new(720.0, 1.0, 80.0), 25.0, 40.0)
    }

    #[test]
    fn test_swimming_metrics() {
        let swim = sample();

        assert!(approx(swim.get_distance(), 0.9936));
        assert!(approx(swim.get_mean_speed(), 1.0));
        assert!(approx(swim.get_spent_calories(), 336.0));
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few_strokes = Swimming::new(TrainingBase::new(100.0, 1.0, 80.0), 25.0, 40.0);

        assert!(approx(few_strokes.get_mean_speed(), sample().get_mean_speed()));
        assert!(few_strokes.get_distance() < sample().get_distance());
    }

    #[test]
    fn test_swimming_summary() {
        assert_eq!(
            sample().show_training_info().get_message(),
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }
}
