//! The renewal state machine.
//!
//! Given a renewal request and the member's current billing state, this
//! module decides exactly one of three outcomes: activate the new
//! period immediately, queue it as a ready pending period, or queue it
//! as a future-dated pending period. A request that collides with an
//! existing pending period is rejected.
//!
//! Policy: at most one pending period per member, unconditionally. A
//! second renewal request is a conflict; edits go through
//! [`PendingPeriod::with_new_terms`] instead.
//!
//! Every decision takes the current instant as a parameter; nothing in
//! here reads the system clock.

use thiserror::Error;

use crate::domain::foundation::Timestamp;

use super::pending::PendingPeriod;
use super::period::BillingPeriod;

/// Upper bound on the month count of a single period (a century).
/// Keeps expiry arithmetic well inside chrono's representable range.
pub const MAX_RENEWAL_MONTHS: i64 = 1200;

/// A renewal request as submitted by the admin.
///
/// `total_fee` is the price of the whole period; the per-month rate is
/// derived. The start may be given explicitly, as a day offset from
/// now, or left out to chain onto the current expiry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenewalRequest {
    /// Months covered by the requested period. Must be in
    /// `1..=MAX_RENEWAL_MONTHS`.
    pub months: i64,
    /// Total fee for the whole period. Must be finite and >= 0.
    pub total_fee: f64,
    /// Explicit start instant (normalized to UTC midnight before use).
    pub start_date: Option<Timestamp>,
    /// Start offset in days from now; only consulted when `start_date`
    /// is absent. Must be >= 0.
    pub start_after_days: Option<i64>,
}

impl RenewalRequest {
    /// Validates field ranges, returning the month count as `u32`.
    pub fn validate(&self) -> Result<u32, RenewalError> {
        if self.months < 1 || self.months > MAX_RENEWAL_MONTHS {
            return Err(RenewalError::InvalidMonths(self.months));
        }
        if !self.total_fee.is_finite() || self.total_fee < 0.0 {
            return Err(RenewalError::InvalidTotalFee(self.total_fee));
        }
        if let Some(days) = self.start_after_days {
            if days < 0 {
                return Err(RenewalError::InvalidStartOffset(days));
            }
        }
        Ok(self.months as u32)
    }
}

/// The single outcome of a renewal decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenewalDecision {
    /// Overwrite the active period now; clear any pending period and
    /// stamp the renewal time.
    ActivateNow(BillingPeriod),
    /// Record the period as `next_period`. `is_pending` on the payload
    /// distinguishes future-dated (true) from already-due-but-queued
    /// (false).
    Queue(PendingPeriod),
}

impl RenewalDecision {
    /// Whether this decision takes effect immediately.
    pub fn is_activation(&self) -> bool {
        matches!(self, RenewalDecision::ActivateNow(_))
    }
}

/// Rejections produced by the renewal state machine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenewalError {
    #[error("months must be between 1 and {MAX_RENEWAL_MONTHS}, got {0}")]
    InvalidMonths(i64),

    #[error("totalFee must be finite and non-negative, got {0}")]
    InvalidTotalFee(f64),

    #[error("startAfterDays must be non-negative, got {0}")]
    InvalidStartOffset(i64),

    #[error("Upcoming subscription already exists")]
    PendingPeriodExists,
}

/// Decides what a renewal request does to the member's billing state.
///
/// Evaluation order mirrors the documented decision procedure:
/// 1. reject when a pending period already exists (strict policy);
/// 2. resolve the candidate start and whether it is immediate;
/// 3. derive the candidate period (calendar expiry, per-month fee);
/// 4. activate now only when immediate and no unexpired active period
///    stands in the way, otherwise queue.
pub fn decide(
    request: &RenewalRequest,
    active: Option<&BillingPeriod>,
    pending: Option<&PendingPeriod>,
    now: Timestamp,
) -> Result<RenewalDecision, RenewalError> {
    let months = request.validate()?;

    if pending.is_some() {
        return Err(RenewalError::PendingPeriodExists);
    }

    let has_active = active.map(|p| !p.is_expired(now)).unwrap_or(false);

    let (start, immediate) = match (request.start_date, request.start_after_days) {
        (Some(explicit), _) => {
            let start = explicit.to_utc_midnight();
            (start, start <= now)
        }
        (None, Some(days)) => {
            let start = now.plus_days(days).to_utc_midnight();
            (start, start <= now)
        }
        (None, None) => {
            // Chain onto the unexpired active period, else start today.
            // This branch is always immediate even when the start sits
            // at a future expiry date.
            let base = match active {
                Some(period) if !period.is_expired(now) => period.expiry_date,
                _ => now,
            };
            (base.to_utc_midnight(), true)
        }
    };

    let period = BillingPeriod::starting_at(start, months, request.total_fee);

    if immediate && !has_active {
        Ok(RenewalDecision::ActivateNow(period))
    } else {
        Ok(RenewalDecision::Queue(PendingPeriod::scheduled_at(
            start,
            months,
            request.total_fee,
            !immediate,
        )))
    }
}
