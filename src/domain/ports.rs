use crate::domain::model::{Mode, Record, RunSummary, ScheduleEntry};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn ensure_dir(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn months_csv(&self) -> &str;
    fn day_ranges_csv(&self) -> &str;
    fn times_csv(&self) -> &str;
    fn root(&self) -> &str;
    fn mode(&self) -> Mode;
    fn use_csv(&self) -> bool;
    fn use_json(&self) -> bool;
    fn overwrite(&self) -> bool;
    fn seed(&self) -> Option<u64>;
}

/// Encodes one record into a leaf file and reads it back. Decoding is
/// lenient: anything unreadable is None, never an error.
pub trait RecordCodec: Send + Sync {
    fn file_name(&self) -> &'static str;
    fn encode(&self, record: &Record) -> Result<Vec<u8>>;
    fn decode(&self, data: &[u8]) -> Option<Record>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn plan(&self) -> Result<Vec<ScheduleEntry>>;
    async fn execute(&self, plan: Vec<ScheduleEntry>) -> Result<RunSummary>;
}
