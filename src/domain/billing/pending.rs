//! Pending (upcoming) billing period and its observable status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::calendar::add_calendar_months;
use super::period::BillingPeriod;

/// A scheduled-but-not-yet-merged billing period.
///
/// At most one pending period exists per member. It is created by a
/// renewal request while an active period is still running, or when a
/// future start was explicitly requested; it is merged into the active
/// period (activation) once due, which clears it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingPeriod {
    /// Start of the scheduled period, always UTC midnight.
    pub join_date: Timestamp,

    /// Calendar-derived end of the scheduled period.
    pub expiry_date: Timestamp,

    /// Whole months covered.
    pub months: u32,

    /// Per-month rate.
    pub fee_per_month: f64,

    /// Scheduled start; identical to `join_date` on creation and kept
    /// stable across edits.
    pub start_date: Timestamp,

    /// True iff the start was strictly in the future when the renewal
    /// was recorded. False marks a period whose start had already
    /// elapsed but which still waits for explicit activation.
    pub is_pending: bool,
}

impl PendingPeriod {
    /// Schedules a period starting at `start` (normalized to midnight).
    pub fn scheduled_at(start: Timestamp, months: u32, total_fee: f64, is_pending: bool) -> Self {
        let period = BillingPeriod::starting_at(start, months, total_fee);
        Self {
            join_date: period.join_date,
            expiry_date: period.expiry_date,
            months: period.months,
            fee_per_month: period.fee_per_month,
            start_date: period.join_date,
            is_pending,
        }
    }

    /// Re-derives expiry and fee from new terms, keeping the original
    /// `join_date`/`start_date` and the pending flag untouched.
    pub fn with_new_terms(&self, months: u32, total_fee: f64) -> Self {
        Self {
            join_date: self.join_date,
            expiry_date: add_calendar_months(self.join_date, months),
            months,
            fee_per_month: total_fee / months as f64,
            start_date: self.start_date,
            is_pending: self.is_pending,
        }
    }

    /// Whether the scheduled start has elapsed as of `now`.
    pub fn is_due(&self, now: Timestamp) -> bool {
        self.start_date <= now
    }

    /// The active-period shape this pending period merges into.
    pub fn as_billing_period(&self) -> BillingPeriod {
        BillingPeriod {
            join_date: self.join_date,
            expiry_date: self.expiry_date,
            months: self.months,
            fee_per_month: self.fee_per_month,
        }
    }
}

/// Observable pending-period state, derived from storage + the clock.
///
/// Making this a sum type keeps the renewal decision branches
/// exhaustively checkable instead of spread over an optional field and
/// a boolean flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingStatus {
    /// No upcoming period is scheduled.
    None,
    /// An upcoming period is scheduled with a start still in the future.
    Future { start_date: Timestamp },
    /// An upcoming period's start has elapsed; it is eligible to merge.
    Ready { start_date: Timestamp },
}

impl PendingStatus {
    /// Classifies an optional pending period against `now`.
    pub fn of(pending: Option<&PendingPeriod>, now: Timestamp) -> Self {
        match pending {
            None => PendingStatus::None,
            Some(p) if p.is_due(now) => PendingStatus::Ready {
                start_date: p.start_date,
            },
            Some(p) => PendingStatus::Future {
                start_date: p.start_date,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn scheduled_at_mirrors_billing_period_fields() {
        let pending = PendingPeriod::scheduled_at(date(2024, 5, 31), 1, 1200.0, true);

        assert_eq!(pending.join_date, date(2024, 5, 31));
        assert_eq!(pending.start_date, date(2024, 5, 31));
        assert_eq!(pending.expiry_date, date(2024, 6, 30));
        assert_eq!(pending.fee_per_month, 1200.0);
        assert!(pending.is_pending);
    }

    #[test]
    fn with_new_terms_preserves_start_and_flag() {
        let original = PendingPeriod::scheduled_at(date(2024, 5, 1), 3, 3000.0, false);
        let edited = original.with_new_terms(6, 5400.0);

        assert_eq!(edited.join_date, original.join_date);
        assert_eq!(edited.start_date, original.start_date);
        assert_eq!(edited.is_pending, original.is_pending);
        assert_eq!(edited.months, 6);
        assert_eq!(edited.expiry_date, date(2024, 11, 1));
        assert_eq!(edited.fee_per_month, 900.0);
    }

    #[test]
    fn is_due_once_start_elapses() {
        let pending = PendingPeriod::scheduled_at(date(2024, 5, 10), 1, 100.0, true);
        assert!(!pending.is_due(date(2024, 5, 9)));
        assert!(pending.is_due(date(2024, 5, 10)));
        assert!(pending.is_due(date(2024, 5, 11)));
    }

    #[test]
    fn status_classification_follows_the_clock() {
        let now = date(2024, 5, 10);
        let future = PendingPeriod::scheduled_at(date(2024, 6, 1), 1, 100.0, true);
        let ready = PendingPeriod::scheduled_at(date(2024, 5, 1), 1, 100.0, false);

        assert_eq!(PendingStatus::of(None, now), PendingStatus::None);
        assert_eq!(
            PendingStatus::of(Some(&future), now),
            PendingStatus::Future {
                start_date: date(2024, 6, 1)
            }
        );
        assert_eq!(
            PendingStatus::of(Some(&ready), now),
            PendingStatus::Ready {
                start_date: date(2024, 5, 1)
            }
        );
    }
}
