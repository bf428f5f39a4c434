use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PackageError;

/// Activity kinds a sensor package can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Swimming,
    Running,
    SportsWalking,
}

impl ActivityKind {
    /// Every supported kind, in selector order
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Short code used by the sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Swimming => "SWM",
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
        }
    }

    /// Label shown in the training summary
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Swimming => "Swimming",
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
        }
    }

    /// Positional field names of the raw values for this kind
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            ActivityKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            ActivityKind::Running => &["action", "duration", "weight"],
            ActivityKind::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of raw values a package of this kind must carry
    pub fn arity(&self) -> usize {
        self.field_names().len()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityKind {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(ActivityKind::Swimming),
            "RUN" => Ok(ActivityKind::Running),
            "WLK" => Ok(ActivityKind::SportsWalking),
            _ => Err(PackageError::UnknownActivityKind {
                code: s.to_string(),
            }),
        }
    }
}

/// Raw sensor package: an activity code and its positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// The fixed sample packages processed when no input is given
    pub fn samples() -> Vec<WorkoutPackage> {
        vec![
            WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}

/// Informational summary of a completed training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Activity performed
    pub training_type: ActivityKind,

    /// Duration in hours
    pub duration: f64,

    /// Distance covered in kilometers
    pub distance: f64,

    /// Mean speed in km/h
    pub speed: f64,

    /// Calories burned
    pub calories: f64,
}

impl InfoMessage {
    /// Render the one-line summary
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type.label(),
            self.duration,
            self.distance,
            self.speed,
            self.calories
        )
    }
}
