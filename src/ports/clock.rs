//! Clock port: the single source of "now".
//!
//! Every date computation in the billing core depends on the current
//! instant. Handlers take it from this port instead of reading the
//! system clock, so tests can pin time deterministically.

use crate::domain::foundation::Timestamp;

/// Supplies the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Test clock pinned to a fixed instant.
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
