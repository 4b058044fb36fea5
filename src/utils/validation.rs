use crate::utils::error::{Result, ScheduleError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScheduleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScheduleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScheduleError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_formats(field_name: &str, formats: &[String]) -> Result<()> {
    let valid_formats = ["csv", "json"];

    if formats.is_empty() {
        return Err(ScheduleError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for format in formats {
        if !valid_formats.contains(&format.as_str()) {
            return Err(ScheduleError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    valid_formats.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_mode(field_name: &str, mode: &str) -> Result<()> {
    match mode {
        "create" | "aggregate" => Ok(()),
        other => Err(ScheduleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: other.to_string(),
            reason: "Mode must be 'create' or 'aggregate'".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("root", "./output").is_ok());
        assert!(validate_path("root", "").is_err());
        assert!(validate_path("root", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("months", "styczeń,luty").is_ok());
        assert!(validate_non_empty_string("months", "").is_err());
        assert!(validate_non_empty_string("months", "   ").is_err());
    }

    #[test]
    fn test_validate_formats() {
        let formats = vec!["csv".to_string(), "json".to_string()];
        assert!(validate_formats("output.formats", &formats).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_formats("output.formats", &invalid).is_err());
        assert!(validate_formats("output.formats", &[]).is_err());
    }

    #[test]
    fn test_validate_mode() {
        assert!(validate_mode("job.mode", "create").is_ok());
        assert!(validate_mode("job.mode", "aggregate").is_ok());
        assert!(validate_mode("job.mode", "read").is_err());
    }
}
