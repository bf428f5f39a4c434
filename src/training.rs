//! Shared training behaviour and the package selector
//!
//! Every activity implements [`Training`]. Distance and mean speed have
//! default formulas driven by [`Training::LEN_STEP`]; only the calorie formula
//! has no default. [`read_package`] turns a raw sensor package into a
//! [`Workout`], the closed set of supported activities.

use crate::error::PackageError;
use crate::models::{ActivityKind, InfoMessage, WorkoutPackage};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::SportsWalking;
use tracing::debug;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Fields every training carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes counted by the sensor
    pub action: f64,
    /// Duration in hours
    pub duration: f64,
    /// Body weight in kilograms
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Calculation interface shared by all activities.
///
/// A zero duration is not rejected: mean speed then follows IEEE float
/// division (infinity, or NaN when the distance is zero too).
pub trait Training {
    /// Distance covered by one step or stroke, in meters
    const LEN_STEP: f64 = 0.65;

    fn kind(&self) -> ActivityKind;

    fn base(&self) -> &TrainingBase;

    /// Distance in kilometers
    fn get_distance(&self) -> f64 {
        self.base().action * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.base().duration
    }

    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind(),
            duration: self.base().duration,
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        }
    }
}

/// A training selected from a sensor package
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Workout::Swimming(t) => t.kind(),
            Workout::Running(t) => t.kind(),
            Workout::SportsWalking(t) => t.kind(),
        }
    }

    pub fn get_distance(&self) -> f64 {
        match self {
            Workout::Swimming(t) => t.get_distance(),
            Workout::Running(t) => t.get_distance(),
            Workout::SportsWalking(t) => t.get_distance(),
        }
    }

    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Workout::Swimming(t) => t.get_mean_speed(),
            Workout::Running(t) => t.get_mean_speed(),
            Workout::SportsWalking(t) => t.get_mean_speed(),
        }
    }

    pub fn get_spent_calories(&self) -> f64 {
        match self {
            Workout::Swimming(t) => t.get_spent_calories(),
            Workout::Running(t) => t.get_spent_calories(),
            Workout::SportsWalking(t) => t.get_spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Workout::Swimming(t) => t.show_training_info(),
            Workout::Running(t) => t.show_training_info(),
            Workout::SportsWalking(t) => t.show_training_info(),
        }
    }
}

/// Read data received from the sensors.
///
/// The code must be one of `SWM`, `RUN`, `WLK` and `data` must hold exactly
/// the values listed by [`ActivityKind::field_names`]. Both are checked
/// before any training is built; the values themselves are taken as given.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, PackageError> {
    let kind: ActivityKind = workout_type.parse()?;

    if data.len() != kind.arity() {
        return Err(PackageError::ArityMismatch {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let base = TrainingBase::new(data[0], data[1], data[2]);

    let workout = match kind {
        ActivityKind::Swimming => Workout::Swimming(Swimming::new(base, data[3], data[4])),
        ActivityKind::Running => Workout::Running(Running::new(base)),
        ActivityKind::SportsWalking => {
            Workout::SportsWalking(SportsWalking::new(base, data[3]))
        }
    };

    debug!(code = workout_type, kind = %kind, "package selected");
    Ok(workout)
}

/// Select a training from a [`WorkoutPackage`]
pub fn read_workout_package(package: &WorkoutPackage) -> Result<Workout, PackageError> {
    read_package(&package.code, &package.data)
}
