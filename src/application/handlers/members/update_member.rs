use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError, MemberUpdate};
use crate::ports::{Clock, MemberRepository};

/// Command to partially edit a member's profile or active terms.
#[derive(Debug, Clone)]
pub struct UpdateMemberCommand {
    pub member_id: MemberId,
    pub update: MemberUpdate,
}

pub struct UpdateMemberHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, command: UpdateMemberCommand) -> Result<Member, MemberError> {
        let mut member = self
            .repository
            .find_by_id(&command.member_id)
            .await?
            .ok_or(MemberError::NotFound(command.member_id))?;

        member.apply_update(command.update, self.clock.now())?;
        self.repository.update(&member).await?;

        tracing::info!(member_id = %member.id, "member updated");
        Ok(member)
    }
}
