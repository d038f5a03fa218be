//! ListMembersHandler - the roster, newest first.

use std::sync::Arc;

use crate::domain::member::{Member, MemberError};
use crate::ports::MemberRepository;

/// Query for the full member roster.
#[derive(Debug, Clone, Default)]
pub struct ListMembersQuery {}

/// Handler for listing members.
pub struct ListMembersHandler {
    repository: Arc<dyn MemberRepository>,
}

impl ListMembersHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListMembersQuery) -> Result<Vec<Member>, MemberError> {
        self.repository.list_all().await
    }
}
