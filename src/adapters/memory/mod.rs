//! In-memory adapters for testing and local development.

mod member_repository;

pub use member_repository::InMemoryMemberRepository;
