//! In-memory member repository.
//!
//! Backs tests and local development. Honors the same version
//! compare-and-swap contract as the MongoDB implementation, so
//! concurrency tests exercise realistic semantics.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};
use crate::ports::MemberRepository;

/// In-memory storage for members, newest-first on listing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<HashMap<MemberId, Member>>>,
    insertion_order: Arc<RwLock<Vec<MemberId>>>,
}

impl InMemoryMemberRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored members (useful for tests).
    pub async fn count(&self) -> usize {
        self.members.read().await.len()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn insert(&self, member: &Member) -> Result<(), MemberError> {
        let mut members = self.members.write().await;
        members.insert(member.id, member.clone());
        self.insertion_order.write().await.push(member.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, MemberError> {
        Ok(self.members.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Member>, MemberError> {
        let members = self.members.read().await;
        let order = self.insertion_order.read().await;
        Ok(order
            .iter()
            .rev()
            .filter_map(|id| members.get(id).cloned())
            .collect())
    }

    async fn update(&self, member: &Member) -> Result<(), MemberError> {
        let mut members = self.members.write().await;
        match members.get(&member.id) {
            None => Err(MemberError::NotFound(member.id)),
            Some(stored) if stored.version + 1 != member.version => {
                Err(MemberError::VersionConflict(member.id))
            }
            Some(_) => {
                members.insert(member.id, member.clone());
                Ok(())
            }
        }
    }

    async fn delete(&self, id: &MemberId) -> Result<bool, MemberError> {
        let removed = self.members.write().await.remove(id).is_some();
        if removed {
            self.insertion_order.write().await.retain(|m| m != id);
        }
        Ok(removed)
    }
}
