pub mod engine;
pub mod expand;
pub mod normalize;
pub mod pipeline;
pub mod plan;

pub use crate::domain::model::{Mode, Record, RunSummary, ScheduleEntry};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RecordCodec, Storage};
pub use crate::utils::error::Result;
