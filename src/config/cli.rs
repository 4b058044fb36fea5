use crate::core::{ConfigProvider, Mode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "plan-tree")]
#[command(about = "Builds a month/day/time-of-day tree and writes or sums record files")]
pub struct CliConfig {
    /// Comma-separated month names, e.g. "styczeń,luty"
    #[arg(short, long, default_value = "")]
    pub months: String,

    /// Comma-separated day ranges, one per month, e.g. "pn-wt,pt"
    #[arg(short, long, default_value = "")]
    pub days: String,

    /// Comma-separated times of day, one per expanded day, e.g. "r,w,r";
    /// missing entries default to "rano"
    #[arg(short = 'p', long, default_value = "")]
    pub times: String,

    /// Create the tree and write records (without this flag the tool reads
    /// and sums existing records)
    #[arg(short = 't', long)]
    pub create: bool,

    /// Work with CSV record files
    #[arg(short, long)]
    pub csv: bool,

    /// Work with JSON record files
    #[arg(short, long)]
    pub json: bool,

    /// Base directory of the tree
    #[arg(short, long, default_value = ".")]
    pub root: String,

    /// Keep existing record files instead of overwriting them
    #[arg(long)]
    pub no_overwrite: bool,

    /// Seed for the record generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load the schedule and output settings from a TOML file instead of
    /// the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log resource usage per run phase
    #[arg(long)]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn months_csv(&self) -> &str {
        &self.months
    }

    fn day_ranges_csv(&self) -> &str {
        &self.days
    }

    fn times_csv(&self) -> &str {
        &self.times
    }

    fn root(&self) -> &str {
        &self.root
    }

    fn mode(&self) -> Mode {
        if self.create {
            Mode::Create
        } else {
            Mode::Aggregate
        }
    }

    fn use_csv(&self) -> bool {
        // CSV is the default format when no format flag is given.
        self.csv || !self.json
    }

    fn use_json(&self) -> bool {
        self.json
    }

    fn overwrite(&self) -> bool {
        !self.no_overwrite
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // With a config file the schedule comes from there; the flags may
        // stay empty.
        if self.config.is_none() {
            validate_non_empty_string("months", &self.months)?;
            validate_non_empty_string("days", &self.days)?;
        }
        validate_path("root", &self.root)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            months: "styczeń".to_string(),
            days: "pn".to_string(),
            times: String::new(),
            create: false,
            csv: false,
            json: false,
            root: ".".to_string(),
            no_overwrite: false,
            seed: None,
            config: None,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn csv_is_the_default_format() {
        let config = base_config();
        assert!(config.use_csv());
        assert!(!config.use_json());
    }

    #[test]
    fn json_flag_alone_disables_csv() {
        let mut config = base_config();
        config.json = true;
        assert!(!config.use_csv());
        assert!(config.use_json());
    }

    #[test]
    fn both_flags_activate_both_formats() {
        let mut config = base_config();
        config.csv = true;
        config.json = true;
        assert!(config.use_csv());
        assert!(config.use_json());
    }

    #[test]
    fn missing_months_fail_validation_without_config_file() {
        let mut config = base_config();
        config.months = String::new();
        assert!(config.validate().is_err());

        config.config = Some("plan.toml".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn create_flag_selects_create_mode() {
        let mut config = base_config();
        assert_eq!(config.mode(), Mode::Aggregate);
        config.create = true;
        assert_eq!(config.mode(), Mode::Create);
    }
}
