// Library interface for TrainStat modules
// This allows integration tests and benchmarks to access the core functionality

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod report;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use models::*;
pub use training::{read_package, read_workout_package, Training, TrainingBase, Workout};
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;
pub use report::{process_package, process_packages, ProcessingReport};
pub use export::{write_report, ReportFormat};
pub use config::AppConfig;
pub use error::{TrainStatError, PackageError, Result};
pub use logging::{LogConfig, LogLevel, LogFormat};
