//! Member aggregate and its error taxonomy.

mod errors;
mod member;

pub use errors::MemberError;
pub use member::{Member, MemberDraft, MemberStanding, MemberUpdate, EXPIRING_SOON_DAYS};
