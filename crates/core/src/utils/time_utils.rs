use chrono::{DateTime, Months, Utc};

use crate::constants::MILLIS_PER_DAY;

/// Adds calendar months to an instant.
///
/// The day of month is clamped to the last day of a shorter target month
/// (Jan 31 + 1 month = Feb 28/29). Returns `None` when the result is out of
/// chrono's representable range.
pub fn add_months(start: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    start.checked_add_months(Months::new(months))
}

/// Whole days from `now` until `target`, rounded up, never negative.
pub fn days_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (target - now).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}
