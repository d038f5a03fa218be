//! MongoDB persistence adapter.

mod database;
mod member_repository;

pub use database::MongoDb;
pub use member_repository::{MemberDocument, MongoMemberRepository};
