//! Billing period value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::calendar::add_calendar_months;

/// A billing interval: UTC-midnight join date, calendar-derived expiry,
/// covered month count, and the per-month rate.
///
/// The stored fee is always per-month; requests and forms communicate
/// the total for the whole period. `total / months` happens exactly
/// once, at construction, with no rounding beyond IEEE doubles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// Start of the period, always UTC midnight.
    pub join_date: Timestamp,

    /// End of the period: `join_date` plus `months` calendar months.
    pub expiry_date: Timestamp,

    /// Whole months covered by this period.
    pub months: u32,

    /// Per-month rate derived from the period total.
    pub fee_per_month: f64,
}

impl BillingPeriod {
    /// Builds a period starting at the given instant.
    ///
    /// The start is normalized to UTC midnight here; expiry comes from
    /// calendar-month arithmetic. `months` must already be validated as
    /// positive and `total_fee` as finite and non-negative.
    pub fn starting_at(start: Timestamp, months: u32, total_fee: f64) -> Self {
        let join_date = start.to_utc_midnight();
        Self {
            join_date,
            expiry_date: add_calendar_months(join_date, months),
            months,
            fee_per_month: total_fee / months as f64,
        }
    }

    /// Total fee for the whole period.
    pub fn total_fee(&self) -> f64 {
        self.fee_per_month * self.months as f64
    }

    /// Whether this period has run out as of `now`.
    ///
    /// A period whose expiry equals `now` exactly is expired; "active"
    /// means the expiry is strictly in the future.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expiry_date <= now
    }

    /// Whole days until expiry, rounded up. Zero or negative means expired.
    pub fn days_left(&self, now: Timestamp) -> i64 {
        let duration = self.expiry_date.duration_since(&now);
        let days = duration.num_days();
        // Round partial days up, matching the dashboard's countdown
        if duration.num_seconds() > days * 86_400 {
            days + 1
        } else {
            days
        }
    }
}
