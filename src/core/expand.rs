use crate::domain::vocab::{day_position, DAY_ABBR_ORDER, DAY_FULL};
use crate::utils::error::{Result, ScheduleError};

fn full_name(abbr: &str) -> Result<&'static str> {
    DAY_FULL
        .get(abbr)
        .copied()
        .ok_or_else(|| ScheduleError::UnknownDayAbbreviation(abbr.to_string()))
}

/// Expand one day-range token into full day names, in week order.
///
/// A token is either a single abbreviation ("pt") or two joined by a dash
/// ("pn-wt"). When the right end precedes the left end in the week order the
/// range wraps across the week boundary: "pt-pn" covers piątek through
/// poniedziałek.
pub fn expand_day_range(range: &str) -> Result<Vec<String>> {
    let range = range.trim().to_lowercase();

    if let Some((a, b)) = range.split_once('-') {
        let (a, b) = (a.trim(), b.trim());
        let i = day_position(a)
            .ok_or_else(|| ScheduleError::UnknownDayAbbreviation(a.to_string()))?;
        let j = day_position(b)
            .ok_or_else(|| ScheduleError::UnknownDayAbbreviation(b.to_string()))?;

        let abbrs: Vec<&str> = if i <= j {
            DAY_ABBR_ORDER[i..=j].to_vec()
        } else {
            DAY_ABBR_ORDER[i..]
                .iter()
                .chain(DAY_ABBR_ORDER[..=j].iter())
                .copied()
                .collect()
        };

        abbrs
            .into_iter()
            .map(|abbr| full_name(abbr).map(str::to_string))
            .collect()
    } else {
        Ok(vec![full_name(&range)?.to_string()])
    }
}
