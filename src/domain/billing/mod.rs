//! Billing core: calendar-month arithmetic and the renewal state machine.

pub mod calendar;
mod pending;
mod period;
pub mod renewal;

pub use calendar::add_calendar_months;
pub use pending::{PendingPeriod, PendingStatus};
pub use period::BillingPeriod;
pub use renewal::{decide, RenewalDecision, RenewalError, RenewalRequest, MAX_RENEWAL_MONTHS};
