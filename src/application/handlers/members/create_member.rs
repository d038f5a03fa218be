//! CreateMemberHandler - signup with an initial active period.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberDraft, MemberError};
use crate::ports::{Clock, MemberRepository};

/// Command to create a member.
#[derive(Debug, Clone)]
pub struct CreateMemberCommand {
    pub draft: MemberDraft,
}

/// Result of successful member creation.
#[derive(Debug, Clone)]
pub struct CreateMemberResult {
    pub member: Member,
}

/// Handler for member signup.
pub struct CreateMemberHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: CreateMemberCommand) -> Result<CreateMemberResult, MemberError> {
        let now = self.clock.now();
        let member = Member::create(MemberId::new(), cmd.draft, now)?;

        self.repository.insert(&member).await?;

        tracing::info!(member_id = %member.id, expiry = %member.period.expiry_date, "member created");
        Ok(CreateMemberResult { member })
    }
}
