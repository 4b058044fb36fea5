use crate::adapters::codec::{CsvCodec, JsonCodec};
use crate::core::normalize::normalize_months;
use crate::core::plan::{build_plan, parse_list};
use crate::core::{
    ConfigProvider, Mode, Pipeline, Record, RecordCodec, RunSummary, ScheduleEntry, Storage,
};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SchedulePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SchedulePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn active_codecs(&self) -> Vec<Box<dyn RecordCodec>> {
        let mut codecs: Vec<Box<dyn RecordCodec>> = Vec::new();
        if self.config.use_csv() {
            codecs.push(Box::new(CsvCodec));
        }
        if self.config.use_json() {
            codecs.push(Box::new(JsonCodec));
        }
        codecs
    }

    fn rng(&self) -> StdRng {
        match self.config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    async fn create(&self, plan: Vec<ScheduleEntry>) -> Result<RunSummary> {
        let codecs = self.active_codecs();
        let mut rng = self.rng();
        let mut files_written = 0;
        let mut files_skipped = 0;

        for entry in &plan {
            let leaf = entry.rel_path();
            // Leaf directories come into existence even when every file
            // write below gets skipped.
            self.storage.ensure_dir(&leaf).await?;

            for codec in &codecs {
                let path = format!("{}/{}", leaf, codec.file_name());
                if !self.config.overwrite() && self.storage.exists(&path).await {
                    tracing::debug!("Skipping existing file: {}", path);
                    files_skipped += 1;
                    continue;
                }

                // Independent draw per file, so CSV and JSON records in the
                // same leaf differ.
                let record = Record::generate(&mut rng);
                let data = codec.encode(&record)?;
                self.storage.write_file(&path, &data).await?;
                files_written += 1;
            }
        }

        Ok(RunSummary::Created {
            files_written,
            files_skipped,
        })
    }

    async fn aggregate(&self, plan: Vec<ScheduleEntry>) -> Result<RunSummary> {
        let codecs = self.active_codecs();
        let mut total_secs = 0;
        let mut files_counted = 0;

        for entry in &plan {
            let leaf = entry.rel_path();

            for codec in &codecs {
                let path = format!("{}/{}", leaf, codec.file_name());
                // Missing or unreadable files contribute nothing; so do
                // records that fail to decode or carry another model.
                let Ok(data) = self.storage.read_file(&path).await else {
                    tracing::debug!("No readable record at {}", path);
                    continue;
                };
                let Some(record) = codec.decode(&data) else {
                    tracing::debug!("Undecodable record at {}", path);
                    continue;
                };
                if !record.is_tracked() {
                    continue;
                }
                if let Some(secs) = record.time_secs() {
                    total_secs += secs;
                    files_counted += 1;
                }
            }
        }

        Ok(RunSummary::Aggregated {
            total_secs,
            files_counted,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SchedulePipeline<S, C> {
    async fn plan(&self) -> Result<Vec<ScheduleEntry>> {
        let months = normalize_months(&parse_list(self.config.months_csv()))?;
        let day_ranges = parse_list(self.config.day_ranges_csv());
        let times = parse_list(self.config.times_csv());

        tracing::debug!(
            "Planning {} month(s), {} day range(s), {} time token(s)",
            months.len(),
            day_ranges.len(),
            times.len()
        );

        build_plan(&months, &day_ranges, &times)
    }

    async fn execute(&self, plan: Vec<ScheduleEntry>) -> Result<RunSummary> {
        match self.config.mode() {
            Mode::Create => self.create(plan).await,
            Mode::Aggregate => self.aggregate(plan).await,
        }
    }
}
