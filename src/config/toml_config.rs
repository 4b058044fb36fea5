use crate::core::{ConfigProvider, Mode};
use crate::utils::error::{Result, ScheduleError};
use crate::utils::validation::{
    validate_formats, validate_mode, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    pub schedule: ScheduleConfig,
    pub output: OutputConfig,
    pub generator: Option<GeneratorConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
    /// "create" or "aggregate".
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub months: String,
    pub days: String,
    pub times: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub root: String,
    pub formats: Vec<String>,
    pub overwrite: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScheduleError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScheduleError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the value of the environment variable;
    /// unset variables keep the placeholder.
    fn substitute_env_vars(content: &str) -> String {
        use once_cell::sync::Lazy;
        use regex::Regex;

        static PLACEHOLDER: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

        PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn months_csv(&self) -> &str {
        &self.schedule.months
    }

    fn day_ranges_csv(&self) -> &str {
        &self.schedule.days
    }

    fn times_csv(&self) -> &str {
        self.schedule.times.as_deref().unwrap_or("")
    }

    fn root(&self) -> &str {
        &self.output.root
    }

    fn mode(&self) -> Mode {
        if self.job.mode == "create" {
            Mode::Create
        } else {
            Mode::Aggregate
        }
    }

    fn use_csv(&self) -> bool {
        self.output.formats.iter().any(|f| f == "csv")
    }

    fn use_json(&self) -> bool {
        self.output.formats.iter().any(|f| f == "json")
    }

    fn overwrite(&self) -> bool {
        self.output.overwrite.unwrap_or(true)
    }

    fn seed(&self) -> Option<u64> {
        self.generator.as_ref().and_then(|g| g.seed)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_mode("job.mode", &self.job.mode)?;
        validate_non_empty_string("schedule.months", &self.schedule.months)?;
        validate_non_empty_string("schedule.days", &self.schedule.days)?;
        validate_path("output.root", &self.output.root)?;
        validate_formats("output.formats", &self.output.formats)?;
        Ok(())
    }
}
