//! Foundation value objects shared across the domain.

mod ids;
mod timestamp;

pub use ids::MemberId;
pub use timestamp::Timestamp;
