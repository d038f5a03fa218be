//! Member repository port.
//!
//! Defines the contract for persisting and retrieving Member
//! aggregates. Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Full-state writes**: `update` persists the whole aggregate in
//!   one storage call; a renewal or activation outcome is never split
//!   across writes
//! - **Optimistic locking**: the aggregate bumps `version` on every
//!   mutation, and `update` must match the pre-mutation version or
//!   fail with `VersionConflict`

use async_trait::async_trait;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};

/// Repository port for Member aggregate persistence.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a newly created member.
    ///
    /// # Errors
    ///
    /// `Infrastructure` on persistence failure.
    async fn insert(&self, member: &Member) -> Result<(), MemberError>;

    /// Find a member by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, MemberError>;

    /// List all members, newest first.
    async fn list_all(&self) -> Result<Vec<Member>, MemberError>;

    /// Persist a mutated aggregate.
    ///
    /// The write is conditional on `member.version - 1` still being the
    /// stored version; the full state (including clearing the pending
    /// period) is applied in a single storage call.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the member no longer exists
    /// - `VersionConflict` if a concurrent write got there first
    /// - `Infrastructure` on persistence failure
    async fn update(&self, member: &Member) -> Result<(), MemberError>;

    /// Delete a member.
    ///
    /// Returns `false` when the id did not resolve.
    async fn delete(&self, id: &MemberId) -> Result<bool, MemberError>;
}
