use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Unknown day abbreviation: {0}")]
    UnknownDayAbbreviation(String),

    #[error("Unknown time of day: {0}")]
    UnknownTimeOfDay(String),

    #[error("Cardinality mismatch: {0}")]
    CardinalityMismatch(String),

    #[error("Too many times of day: {supplied} supplied for {expanded} expanded day(s)")]
    TooManyTimesOfDay { supplied: usize, expanded: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ScheduleInput,
    Configuration,
    Encoding,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScheduleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownMonth(_)
            | Self::UnknownDayAbbreviation(_)
            | Self::UnknownTimeOfDay(_)
            | Self::CardinalityMismatch(_)
            | Self::TooManyTimesOfDay { .. } => ErrorCategory::ScheduleInput,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Encoding,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::ScheduleInput | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Encoding => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::UnknownMonth(_) => {
                "Use full month names like 'styczeń' or 'luty' (case-insensitive)".to_string()
            }
            Self::UnknownDayAbbreviation(_) => {
                "Day ranges use the abbreviations pn, wt, sr, cz, pt, so, nd, e.g. 'pn-wt'"
                    .to_string()
            }
            Self::UnknownTimeOfDay(_) => {
                "Times of day are 'r'/'rano' or 'w'/'wieczór'/'wieczorem'".to_string()
            }
            Self::CardinalityMismatch(_) => {
                "Pass exactly one day range per month, e.g. -m styczeń,luty -d pn-wt,pt".to_string()
            }
            Self::TooManyTimesOfDay { .. } => {
                "Pass at most one time of day per expanded day; missing ones default to 'rano'"
                    .to_string()
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Check the configuration values and try again".to_string()
            }
            Self::CsvError(_) | Self::SerializationError(_) => {
                "The record could not be encoded; this is likely a bug worth reporting".to_string()
            }
            Self::IoError(_) => {
                "Check that the root directory exists and is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::ScheduleInput => format!("Invalid schedule description: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Encoding => format!("Record encoding failed: {}", self),
            ErrorCategory::System => format!("Filesystem operation failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
