//! Distance, speed and calorie summaries for running, walking and swimming.

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod training;
pub mod types;
pub mod utils;

pub use dispatch::{BatchReport, OutputFormat, resolve, run, run_batch};
pub use error::TrainingError;
pub use types::{Package, Summary, WorkoutKind, WorkoutRecord};
