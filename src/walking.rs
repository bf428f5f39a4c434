//! Sports walking: running's distance and speed, with a height-aware calorie burn.

use crate::models::ActivityKind;
use crate::training::{Training, TrainingBase, MIN_IN_H};

/// Weight multiplier in the walking calorie formula
const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Speed-height multiplier in the walking calorie formula
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Training: sports walking
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    /// Height in centimeters
    height: f64,
}

impl SportsWalking {
    pub fn new(base: TrainingBase, height: f64) -> Self {
        Self { base, height }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Squared speed is floor-divided by height: the quotient is rounded
    /// down before scaling, so for usual speeds and heights the second term
    /// is zero.
    fn get_spent_calories(&self) -> f64 {
        let mean_speed = self.get_mean_speed();
        let speed_per_height = (mean_speed.powi(2) / self.height).floor();

        (CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + speed_per_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.base.weight)
            * self.base.duration
            * MIN_IN_H
    }
}
