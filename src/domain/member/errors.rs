//! Error taxonomy for member operations.
//!
//! Four categories map onto the HTTP boundary: validation (400), not
//! found (404), conflict (409), and infrastructure (500). The mapping
//! itself lives in the HTTP adapter; this module only names the cases.

use thiserror::Error;

use crate::domain::billing::RenewalError;
use crate::domain::foundation::MemberId;

/// Errors raised by member commands and queries.
#[derive(Debug, Clone, Error)]
pub enum MemberError {
    /// A request field failed validation. The message identifies the field.
    #[error("Field '{field}' is invalid: {reason}")]
    Validation { field: String, reason: String },

    /// The member id does not resolve to a record.
    #[error("Member {0} not found")]
    NotFound(MemberId),

    /// A pending period already exists; the strict policy forbids a second.
    #[error("Upcoming subscription already exists")]
    PendingPeriodExists,

    /// An edit targeted a pending period that is not there.
    #[error("No upcoming subscription to edit")]
    NoPendingPeriod,

    /// A concurrent write bumped the member's version first.
    #[error("Member {0} was modified concurrently")]
    VersionConflict(MemberId),

    /// Storage or an external dependency failed. The inner detail is
    /// logged, never surfaced to callers.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl MemberError {
    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MemberError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an infrastructure error from any displayable source.
    pub fn infrastructure(detail: impl std::fmt::Display) -> Self {
        MemberError::Infrastructure(detail.to_string())
    }
}

impl From<RenewalError> for MemberError {
    fn from(err: RenewalError) -> Self {
        match err {
            RenewalError::InvalidMonths(got) => {
                MemberError::validation("months", format!("must be a positive integer, got {got}"))
            }
            RenewalError::InvalidTotalFee(got) => MemberError::validation(
                "totalFee",
                format!("must be finite and non-negative, got {got}"),
            ),
            RenewalError::InvalidStartOffset(got) => MemberError::validation(
                "startAfterDays",
                format!("must be non-negative, got {got}"),
            ),
            RenewalError::PendingPeriodExists => MemberError::PendingPeriodExists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = MemberError::validation("months", "must be a positive integer, got 0");
        assert_eq!(
            err.to_string(),
            "Field 'months' is invalid: must be a positive integer, got 0"
        );
    }

    #[test]
    fn renewal_conflict_maps_to_pending_period_exists() {
        let err: MemberError = RenewalError::PendingPeriodExists.into();
        assert!(matches!(err, MemberError::PendingPeriodExists));
        assert_eq!(err.to_string(), "Upcoming subscription already exists");
    }

    #[test]
    fn renewal_validation_maps_to_field_errors() {
        let err: MemberError = RenewalError::InvalidMonths(-1).into();
        match err {
            MemberError::Validation { field, .. } => assert_eq!(field, "months"),
            other => panic!("expected validation, got {:?}", other),
        }
    }
}
