use crate::domain::vocab::{MONTHS, TIME_OF_DAY_FORMS};
use crate::utils::error::{Result, ScheduleError};

/// Resolve raw month tokens to their canonical spellings, preserving order.
/// Matching is case-insensitive and exact; no fuzzy or prefix matching.
pub fn normalize_months(raw: &[String]) -> Result<Vec<String>> {
    raw.iter()
        .map(|token| {
            let lowered = token.trim().to_lowercase();
            MONTHS
                .iter()
                .find(|month| **month == lowered)
                .map(|month| month.to_string())
                .ok_or_else(|| ScheduleError::UnknownMonth(token.clone()))
        })
        .collect()
}

/// Resolve raw time-of-day tokens (short codes or long-form synonyms) to
/// their canonical spellings, preserving order.
pub fn normalize_times(raw: &[String]) -> Result<Vec<String>> {
    raw.iter()
        .map(|token| {
            let lowered = token.trim().to_lowercase();
            TIME_OF_DAY_FORMS
                .get(lowered.as_str())
                .map(|canonical| canonical.to_string())
                .ok_or_else(|| ScheduleError::UnknownTimeOfDay(token.clone()))
        })
        .collect()
}
