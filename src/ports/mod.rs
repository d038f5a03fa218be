//! Ports: trait contracts between the application core and adapters.

mod authenticator;
mod clock;
mod member_repository;
mod photo_store;

pub use authenticator::Authenticator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use member_repository::MemberRepository;
pub use photo_store::{PhotoError, PhotoStore, StoredPhoto};
