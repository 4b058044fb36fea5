use crate::core::expand::expand_day_range;
use crate::core::normalize::normalize_times;
use crate::domain::model::ScheduleEntry;
use crate::domain::vocab::DEFAULT_TIME_OF_DAY;
use crate::utils::error::{Result, ScheduleError};

/// Split a comma-separated argument into trimmed, non-empty tokens.
pub fn parse_list(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the ordered plan from normalized months, one raw day-range token per
/// month, and a flattened list of raw time-of-day tokens.
///
/// Times cover the expanded days in order, across month boundaries; days the
/// list does not reach get the default time of day. The operation is
/// all-or-nothing: any invalid token aborts without a partial plan.
pub fn build_plan(
    months: &[String],
    day_ranges: &[String],
    times: &[String],
) -> Result<Vec<ScheduleEntry>> {
    if day_ranges.len() != months.len() {
        return Err(ScheduleError::CardinalityMismatch(format!(
            "{} day range(s) for {} month(s)",
            day_ranges.len(),
            months.len()
        )));
    }

    let expanded = day_ranges
        .iter()
        .map(|range| expand_day_range(range))
        .collect::<Result<Vec<_>>>()?;
    let total_days: usize = expanded.iter().map(Vec::len).sum();

    if times.len() > total_days {
        return Err(ScheduleError::TooManyTimesOfDay {
            supplied: times.len(),
            expanded: total_days,
        });
    }

    let mut times = times.to_vec();
    while times.len() < total_days {
        times.push(DEFAULT_TIME_OF_DAY.to_string());
    }
    let times = normalize_times(&times)?;

    // One shared cursor into the flattened times list, advanced per emitted
    // entry so the correspondence survives month boundaries.
    let mut plan = Vec::with_capacity(total_days);
    let mut cursor = 0;
    for (month, days) in months.iter().zip(&expanded) {
        for day in days {
            plan.push(ScheduleEntry {
                month: month.clone(),
                day: day.clone(),
                time_of_day: times[cursor].clone(),
            });
            cursor += 1;
        }
    }

    Ok(plan)
}
