//! Processing a batch of sensor packages into a report
//!
//! Each package is selected and summarized on its own; a failing package is
//! recorded in the report and logged, and the remaining packages still run.

use crate::error::{log_error, PackageError};
use crate::models::{InfoMessage, WorkoutPackage};
use crate::training::read_workout_package;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// Result of processing one package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Summary(InfoMessage),
    Failed(String),
}

/// One processed package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Position of the package in the input
    pub index: usize,
    /// Activity code as given
    pub code: String,
    pub outcome: Outcome,
}

impl ReportEntry {
    pub fn summary(&self) -> Option<&InfoMessage> {
        match &self.outcome {
            Outcome::Summary(info) => Some(info),
            Outcome::Failed(_) => None,
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
}

impl ProcessingReport {
    /// Summaries of the packages that succeeded, in input order
    pub fn summaries(&self) -> impl Iterator<Item = &InfoMessage> {
        self.entries.iter().filter_map(ReportEntry::summary)
    }

    pub fn success_count(&self) -> usize {
        self.summaries().count()
    }

    pub fn failure_count(&self) -> usize {
        self.entries.len() - self.success_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ReportEntry, &str)> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            Outcome::Failed(reason) => Some((entry, reason.as_str())),
            Outcome::Summary(_) => None,
        })
    }
}

/// Summarize a single package
pub fn process_package(package: &WorkoutPackage) -> Result<InfoMessage, PackageError> {
    let training = read_workout_package(package)?;
    let info = training.show_training_info();
    debug!(kind = %info.training_type, calories = info.calories, "training summarized");
    Ok(info)
}

/// Summarize every package, isolating failures per package
pub fn process_packages(packages: &[WorkoutPackage]) -> ProcessingReport {
    let entries = packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let _span = info_span!("package", index, code = %package.code).entered();

            let outcome = match process_package(package) {
                Ok(info) => Outcome::Summary(info),
                Err(err) => {
                    log_error(err.severity(), &err);
                    Outcome::Failed(err.user_message())
                }
            };

            ReportEntry {
                index,
                code: package.code.clone(),
                outcome,
            }
        })
        .collect();

    ProcessingReport {
        generated_at: Utc::now(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityKind;

    #[test]
    fn test_process_samples() {
        let report = process_packages(&WorkoutPackage::samples());

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.success_count(), 3);
        assert_eq!(report.failure_count(), 0);

        let kinds: Vec<ActivityKind> = report.summaries().map(|s| s.training_type).collect();
        assert_eq!(
            kinds,
            vec![ActivityKind::Swimming, ActivityKind::Running, ActivityKind::SportsWalking]
        );
    }

    #[test]
    fn test_failures_are_isolated() {
        let packages = vec![
            WorkoutPackage::new("XYZ", vec![1.0]),
            WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0, 180.0]),
            WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];
        let report = process_packages(&packages);

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failure_count(), 2);
        assert_eq!(report.entries[2].summary().unwrap().training_type, ActivityKind::Running);

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures[0].0.index, 0);
        assert!(failures[0].1.contains("Unknown workout code 'XYZ'"));
        assert!(failures[1].1.contains("need 3 values"));
    }

    #[test]
    fn test_process_package_error() {
        let err = process_package(&WorkoutPackage::new("WLK", vec![9000.0])).unwrap_err();
        assert!(matches!(err, PackageError::ArityMismatch { expected: 4, actual: 1, .. }));
    }
}
