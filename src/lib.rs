pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use crate::core::{engine::PlanEngine, pipeline::SchedulePipeline};
pub use domain::model::{Mode, Record, RunSummary, ScheduleEntry};
pub use utils::error::{Result, ScheduleError};
