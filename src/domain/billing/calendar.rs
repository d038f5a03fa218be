//! Calendar-month arithmetic for billing period expiry dates.
//!
//! Expiry dates advance by whole calendar months, never by fixed 30-day
//! multiples: Jan 31 + 1 month is Feb 28 (or Feb 29 in a leap year), not
//! Mar 2. The day-of-month is preserved unless the target month is
//! shorter, in which case it clamps to the target month's last day.

use chrono::Datelike;

use crate::domain::foundation::Timestamp;

/// Adds `months` calendar months to a start instant.
///
/// The start MUST already be normalized to UTC midnight (see
/// [`Timestamp::to_utc_midnight`]); normalization is the caller's step,
/// not this function's. The result is always UTC midnight of the
/// computed calendar date.
///
/// Callers bound `months` at validation time (see
/// `RenewalRequest::validate`); month counts large enough to push the
/// result past chrono's representable date range are never admitted.
pub fn add_calendar_months(start: Timestamp, months: u32) -> Timestamp {
    debug_assert!(start.is_utc_midnight(), "start must be UTC midnight");

    let date = start.as_datetime().date_naive();
    let (year, month0, day) = (date.year(), date.month0(), date.day());

    // Reduce the raw month index into (year offset, month within year).
    let target = month0 + months;
    let target_year = year + (target / 12) as i32;
    let target_month = target % 12 + 1;

    let final_day = day.min(days_in_month(target_year, target_month));

    // target_year/target_month/final_day is a valid date by construction
    Timestamp::from_ymd(target_year, target_month, final_day).unwrap()
}

/// Number of days in the given month (1-based), leap-year aware.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // Day 1 of the following month minus one day lands on the last day.
    chrono::NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}
