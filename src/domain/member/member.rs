//! Member aggregate entity.
//!
//! A Member owns exactly one active billing period and at most one
//! pending (upcoming) period. Renewals run through the billing state
//! machine; activation merges the pending period into the active one.
//!
//! # Design Decisions
//!
//! - **Injected clock**: every mutation takes `now` as a parameter
//! - **Version counter**: each mutation bumps `version`, and the
//!   repository writes compare-and-swap on it (no lost updates)
//! - **Full-object writes**: a mutation produces the complete next
//!   state; persistence never splits a period across writes

use serde::{Deserialize, Serialize};

use crate::domain::billing::{
    decide, BillingPeriod, PendingPeriod, PendingStatus, RenewalDecision, RenewalRequest,
};
use crate::domain::foundation::{MemberId, Timestamp};

use super::errors::MemberError;

/// Days-to-expiry threshold below which a member counts as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 5;

/// Member aggregate: profile, active billing period, optional pending period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier.
    pub id: MemberId,

    /// Full name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone number.
    pub phone: String,

    /// URL of the uploaded member photo, if any.
    pub photo_url: Option<String>,

    /// The billing period currently in effect.
    pub period: BillingPeriod,

    /// The scheduled upcoming period, when one exists.
    pub next_period: Option<PendingPeriod>,

    /// When a renewal last merged into the active period.
    pub last_renewal: Option<Timestamp>,

    /// When the member record was created.
    pub created_at: Timestamp,

    /// When the member record was last written.
    pub updated_at: Timestamp,

    /// Optimistic-concurrency counter; bumped on every mutation.
    pub version: u64,
}

/// Input for member creation.
#[derive(Debug, Clone)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub photo_url: Option<String>,
    /// Start of the initial period; defaults to now when absent.
    pub join_date: Option<Timestamp>,
    pub months: i64,
    pub total_fee: f64,
}

/// Partial profile/period edit. Absent fields stay untouched; when any
/// of `join_date`/`months`/`total_fee` is present the active period is
/// re-derived with calendar-month arithmetic.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub join_date: Option<Timestamp>,
    pub months: Option<i64>,
    pub total_fee: Option<f64>,
}

/// Roster status as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberStanding {
    Active,
    ExpiringSoon,
    Expired,
}

impl Member {
    /// Creates a member with an initial active period.
    ///
    /// The join date is normalized to UTC midnight and the expiry is
    /// derived by calendar-month arithmetic.
    ///
    /// # Errors
    ///
    /// `Validation` when the name or email is empty, months is not a
    /// positive integer, or the fee is not finite and non-negative.
    pub fn create(id: MemberId, draft: MemberDraft, now: Timestamp) -> Result<Self, MemberError> {
        if draft.name.trim().is_empty() {
            return Err(MemberError::validation("name", "cannot be empty"));
        }
        if draft.email.trim().is_empty() {
            return Err(MemberError::validation("email", "cannot be empty"));
        }
        let months = validate_terms(draft.months, draft.total_fee)?;

        let start = draft.join_date.unwrap_or(now);
        let period = BillingPeriod::starting_at(start, months, draft.total_fee);

        Ok(Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            photo_url: draft.photo_url,
            period,
            next_period: None,
            last_renewal: None,
            created_at: now,
            updated_at: now,
            version: 0,
        })
    }

    /// Runs a renewal request through the state machine and applies the
    /// outcome.
    ///
    /// Returns `true` when the request activated immediately, `false`
    /// when it was queued as the pending period.
    ///
    /// # Errors
    ///
    /// - `Validation` for bad months/fee/start offset
    /// - `PendingPeriodExists` when an upcoming period is already scheduled
    pub fn renew(&mut self, request: &RenewalRequest, now: Timestamp) -> Result<bool, MemberError> {
        let decision = decide(request, Some(&self.period), self.next_period.as_ref(), now)?;

        let activated = match decision {
            RenewalDecision::ActivateNow(period) => {
                self.period = period;
                self.next_period = None;
                self.last_renewal = Some(now);
                true
            }
            RenewalDecision::Queue(pending) => {
                self.next_period = Some(pending);
                false
            }
        };
        self.touch(now);
        Ok(activated)
    }

    /// Edits the existing pending period in place.
    ///
    /// Keeps the original `join_date`/`start_date` and pending flag;
    /// only the expiry and per-month fee are re-derived from the new
    /// terms.
    ///
    /// # Errors
    ///
    /// - `NoPendingPeriod` when nothing is scheduled
    /// - `Validation` for bad months/fee
    pub fn edit_pending(
        &mut self,
        months: i64,
        total_fee: f64,
        now: Timestamp,
    ) -> Result<(), MemberError> {
        let months = validate_terms(months, total_fee)?;
        let pending = self.next_period.ok_or(MemberError::NoPendingPeriod)?;
        self.next_period = Some(pending.with_new_terms(months, total_fee));
        self.touch(now);
        Ok(())
    }

    /// Merges the pending period into the active period if its start
    /// has elapsed, regardless of the pending flag.
    ///
    /// Returns `true` when an activation happened.
    pub fn activate_if_due(&mut self, now: Timestamp) -> bool {
        match self.next_period {
            Some(pending) if pending.is_due(now) => {
                self.merge_pending(pending, now);
                true
            }
            _ => false,
        }
    }

    /// Read-path activation: merges only a *flagged* pending period
    /// whose scheduled start has elapsed. Queued-ready periods (flag
    /// false) wait for the explicit activation call.
    pub fn poll_pending(&mut self, now: Timestamp) -> bool {
        match self.next_period {
            Some(pending) if pending.is_pending && pending.is_due(now) => {
                self.merge_pending(pending, now);
                true
            }
            _ => false,
        }
    }

    /// Applies a partial edit; re-derives the active period when any
    /// billing term changed.
    ///
    /// # Errors
    ///
    /// `Validation` for empty name/email or bad months/fee.
    pub fn apply_update(&mut self, update: MemberUpdate, now: Timestamp) -> Result<(), MemberError> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(MemberError::validation("name", "cannot be empty"));
            }
        }
        if let Some(email) = &update.email {
            if email.trim().is_empty() {
                return Err(MemberError::validation("email", "cannot be empty"));
            }
        }

        let terms_changed =
            update.join_date.is_some() || update.months.is_some() || update.total_fee.is_some();
        if terms_changed {
            let months_raw = update.months.unwrap_or(self.period.months as i64);
            let total_fee = update
                .total_fee
                .unwrap_or_else(|| self.period.fee_per_month * months_raw.max(0) as f64);
            let months = validate_terms(months_raw, total_fee)?;
            let start = update.join_date.unwrap_or(self.period.join_date);
            self.period = BillingPeriod::starting_at(start, months, total_fee);
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(photo_url) = update.photo_url {
            self.photo_url = Some(photo_url);
        }

        self.touch(now);
        Ok(())
    }

    /// Whether the active period has run out.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.period.is_expired(now)
    }

    /// Pending-period state as of `now`.
    pub fn pending_status(&self, now: Timestamp) -> PendingStatus {
        PendingStatus::of(self.next_period.as_ref(), now)
    }

    /// Roster classification: expired members with an upcoming period
    /// still count as active, matching the dashboard filters.
    pub fn standing(&self, now: Timestamp) -> MemberStanding {
        let days_left = self.period.days_left(now);
        if days_left <= 0 {
            if self.next_period.is_some() {
                MemberStanding::Active
            } else {
                MemberStanding::Expired
            }
        } else if days_left <= EXPIRING_SOON_DAYS {
            MemberStanding::ExpiringSoon
        } else {
            MemberStanding::Active
        }
    }

    fn merge_pending(&mut self, pending: PendingPeriod, now: Timestamp) {
        self.period = pending.as_billing_period();
        self.next_period = None;
        self.last_renewal = Some(now);
        self.touch(now);
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
        self.version += 1;
    }
}

fn validate_terms(months: i64, total_fee: f64) -> Result<u32, MemberError> {
    RenewalRequest {
        months,
        total_fee,
        start_date: None,
        start_after_days: None,
    }
    .validate()
    .map_err(MemberError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    fn draft(months: i64, total_fee: f64) -> MemberDraft {
        MemberDraft {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            photo_url: None,
            join_date: Some(date(2024, 1, 15)),
            months,
            total_fee,
        }
    }

    fn member(months: i64, total_fee: f64) -> Member {
        Member::create(MemberId::new(), draft(months, total_fee), date(2024, 1, 15)).unwrap()
    }

    // Construction tests

    #[test]
    fn create_derives_initial_period() {
        let m = member(3, 3000.0);

        assert_eq!(m.period.join_date, date(2024, 1, 15));
        assert_eq!(m.period.expiry_date, date(2024, 4, 15));
        assert_eq!(m.period.fee_per_month, 1000.0);
        assert!(m.next_period.is_none());
        assert!(m.last_renewal.is_none());
        assert_eq!(m.version, 0);
    }

    #[test]
    fn create_defaults_join_date_to_now() {
        let mut d = draft(1, 500.0);
        d.join_date = None;
        let m = Member::create(MemberId::new(), d, date(2024, 2, 3)).unwrap();
        assert_eq!(m.period.join_date, date(2024, 2, 3));
    }

    #[test]
    fn create_rejects_empty_name() {
        let mut d = draft(1, 500.0);
        d.name = "  ".to_string();
        let err = Member::create(MemberId::new(), d, date(2024, 2, 3)).unwrap_err();
        assert!(matches!(err, MemberError::Validation { .. }));
    }

    #[test]
    fn create_rejects_non_positive_months() {
        let err = Member::create(MemberId::new(), draft(0, 500.0), date(2024, 2, 3)).unwrap_err();
        match err {
            MemberError::Validation { field, .. } => assert_eq!(field, "months"),
            other => panic!("expected validation, got {:?}", other),
        }
    }

    // Renewal tests

    #[test]
    fn renew_expired_member_activates_and_stamps() {
        let mut m = member(1, 500.0); // expires 2024-02-15
        let now = date(2024, 3, 1);
        assert!(m.is_expired(now));

        let activated = m
            .renew(
                &RenewalRequest {
                    months: 3,
                    total_fee: 3000.0,
                    start_date: None,
                    start_after_days: None,
                },
                now,
            )
            .unwrap();

        assert!(activated);
        assert_eq!(m.period.join_date, date(2024, 3, 1));
        assert_eq!(m.period.expiry_date, date(2024, 6, 1));
        assert_eq!(m.period.fee_per_month, 1000.0);
        assert_eq!(m.last_renewal, Some(now));
        assert!(m.next_period.is_none());
        assert_eq!(m.version, 1);
    }

    #[test]
    fn renew_active_member_queues_at_expiry() {
        let mut m = member(1, 500.0); // expires 2024-02-15
        let now = date(2024, 2, 5); // 10 days left

        let activated = m
            .renew(
                &RenewalRequest {
                    months: 6,
                    total_fee: 6000.0,
                    start_date: None,
                    start_after_days: None,
                },
                now,
            )
            .unwrap();

        assert!(!activated);
        let pending = m.next_period.unwrap();
        assert_eq!(pending.join_date, date(2024, 2, 15));
        assert_eq!(pending.months, 6);
        assert_eq!(pending.fee_per_month, 1000.0);
        assert!(!pending.is_pending);
        assert!(m.last_renewal.is_none());
        // Active period untouched until activation
        assert_eq!(m.period.expiry_date, date(2024, 2, 15));
    }

    #[test]
    fn second_renewal_while_pending_is_a_conflict() {
        let mut m = member(1, 500.0);
        let now = date(2024, 2, 5);
        let req = RenewalRequest {
            months: 6,
            total_fee: 6000.0,
            start_date: None,
            start_after_days: None,
        };
        m.renew(&req, now).unwrap();
        let snapshot = m.clone();

        let err = m.renew(&req, now).unwrap_err();
        assert!(matches!(err, MemberError::PendingPeriodExists));
        assert_eq!(m, snapshot, "rejected renewal must not mutate state");
    }

    #[test]
    fn failed_validation_does_not_mutate() {
        let mut m = member(1, 500.0);
        let snapshot = m.clone();

        let err = m
            .renew(
                &RenewalRequest {
                    months: 0,
                    total_fee: 100.0,
                    start_date: None,
                    start_after_days: None,
                },
                date(2024, 2, 5),
            )
            .unwrap_err();

        assert!(matches!(err, MemberError::Validation { .. }));
        assert_eq!(m, snapshot);
    }

    // Pending edit tests

    #[test]
    fn edit_pending_recomputes_terms_keeping_start() {
        let mut m = member(1, 500.0);
        let now = date(2024, 2, 5);
        m.renew(
            &RenewalRequest {
                months: 6,
                total_fee: 6000.0,
                start_date: None,
                start_after_days: None,
            },
            now,
        )
        .unwrap();
        let original_start = m.next_period.unwrap().start_date;

        m.edit_pending(3, 2700.0, now).unwrap();

        let edited = m.next_period.unwrap();
        assert_eq!(edited.start_date, original_start);
        assert_eq!(edited.join_date, original_start);
        assert_eq!(edited.months, 3);
        assert_eq!(edited.fee_per_month, 900.0);
        assert_eq!(edited.expiry_date, date(2024, 5, 15));
    }

    #[test]
    fn edit_pending_without_pending_fails() {
        let mut m = member(1, 500.0);
        let err = m.edit_pending(3, 2700.0, date(2024, 2, 5)).unwrap_err();
        assert!(matches!(err, MemberError::NoPendingPeriod));
    }

    // Activation tests

    #[test]
    fn poll_activates_flagged_pending_once_due() {
        let mut m = member(1, 500.0);
        let now = date(2024, 2, 5);
        m.renew(
            &RenewalRequest {
                months: 1,
                total_fee: 900.0,
                start_date: Some(date(2024, 3, 6)),
                start_after_days: None,
            },
            now,
        )
        .unwrap();
        assert!(m.next_period.unwrap().is_pending);

        // Before the scheduled start: untouched
        assert!(!m.poll_pending(date(2024, 3, 5)));
        assert!(m.next_period.is_some());

        // After the start: merged
        let later = date(2024, 3, 7);
        assert!(m.poll_pending(later));
        assert!(m.next_period.is_none());
        assert_eq!(m.period.join_date, date(2024, 3, 6));
        assert_eq!(m.period.expiry_date, date(2024, 4, 6));
        assert_eq!(m.last_renewal, Some(later));
    }

    #[test]
    fn poll_skips_unflagged_ready_pending() {
        let mut m = member(1, 500.0); // expires 2024-02-15
        let now = date(2024, 2, 5);
        m.renew(
            &RenewalRequest {
                months: 6,
                total_fee: 6000.0,
                start_date: None,
                start_after_days: None,
            },
            now,
        )
        .unwrap();

        // Queued ready (flag false), due after old expiry elapses
        assert!(!m.poll_pending(date(2024, 2, 20)));
        assert!(m.next_period.is_some());

        // The explicit activation path does merge it
        assert!(m.activate_if_due(date(2024, 2, 20)));
        assert!(m.next_period.is_none());
        assert_eq!(m.period.join_date, date(2024, 2, 15));
    }

    #[test]
    fn activate_if_due_leaves_future_pending_alone() {
        let mut m = member(1, 500.0);
        m.renew(
            &RenewalRequest {
                months: 1,
                total_fee: 900.0,
                start_date: Some(date(2024, 3, 6)),
                start_after_days: None,
            },
            date(2024, 2, 5),
        )
        .unwrap();

        assert!(!m.activate_if_due(date(2024, 3, 1)));
        assert!(m.next_period.is_some());
    }

    // Update tests

    #[test]
    fn apply_update_rebuilds_period_with_calendar_months() {
        let mut m = member(1, 500.0);
        m.apply_update(
            MemberUpdate {
                months: Some(6),
                total_fee: Some(5400.0),
                ..Default::default()
            },
            date(2024, 1, 20),
        )
        .unwrap();

        assert_eq!(m.period.join_date, date(2024, 1, 15));
        assert_eq!(m.period.expiry_date, date(2024, 7, 15));
        assert_eq!(m.period.fee_per_month, 900.0);
    }

    #[test]
    fn apply_update_profile_only_keeps_period() {
        let mut m = member(1, 500.0);
        let before = m.period;
        m.apply_update(
            MemberUpdate {
                phone: Some("+91 90000 00000".to_string()),
                ..Default::default()
            },
            date(2024, 1, 20),
        )
        .unwrap();

        assert_eq!(m.period, before);
        assert_eq!(m.phone, "+91 90000 00000");
        assert_eq!(m.version, 1);
    }

    // Standing tests

    #[test]
    fn standing_tracks_days_left_and_upcoming() {
        let m = member(1, 500.0); // expires 2024-02-15

        assert_eq!(m.standing(date(2024, 1, 20)), MemberStanding::Active);
        assert_eq!(m.standing(date(2024, 2, 12)), MemberStanding::ExpiringSoon);
        assert_eq!(m.standing(date(2024, 3, 1)), MemberStanding::Expired);

        let mut with_upcoming = member(1, 500.0);
        with_upcoming
            .renew(
                &RenewalRequest {
                    months: 1,
                    total_fee: 500.0,
                    start_date: Some(date(2024, 4, 1)),
                    start_after_days: None,
                },
                date(2024, 2, 5),
            )
            .unwrap();
        assert_eq!(
            with_upcoming.standing(date(2024, 3, 1)),
            MemberStanding::Active,
            "expired but upcoming counts as active"
        );
    }
}
