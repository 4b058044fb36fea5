use crate::domain::vocab::{MODEL_LABELS, TRACKED_MODEL};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One leaf of the plan: the path `root/month/day/time_of_day` holds the
/// record files for this entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: String,
    pub day: String,
    pub time_of_day: String,
}

impl ScheduleEntry {
    /// Path of the leaf directory relative to the tree root.
    pub fn rel_path(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.time_of_day)
    }
}

/// The synthetic payload written to each leaf. Field names are fixed by the
/// on-disk formats and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Wynik")]
    pub score: i64,
    /// Duration with its unit suffix, e.g. "465s".
    #[serde(rename = "Czas")]
    pub time: String,
}

impl Record {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let model = MODEL_LABELS[rng.gen_range(0..MODEL_LABELS.len())].to_string();
        let score = rng.gen_range(0..=1000);
        let secs: i64 = rng.gen_range(0..=1000);
        Self {
            model,
            score,
            time: format!("{}s", secs),
        }
    }

    /// Seconds parsed out of the time field; the "s" suffix is optional.
    pub fn time_secs(&self) -> Option<i64> {
        let raw = self.time.trim();
        let raw = raw.strip_suffix('s').unwrap_or(raw);
        raw.parse().ok()
    }

    pub fn is_tracked(&self) -> bool {
        self.model == TRACKED_MODEL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Aggregate,
}

/// What a finished run did, reported by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    Created {
        files_written: usize,
        files_skipped: usize,
    },
    Aggregated {
        total_secs: i64,
        files_counted: usize,
    },
}
