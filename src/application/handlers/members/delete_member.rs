use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::MemberError;
use crate::ports::MemberRepository;

#[derive(Debug, Clone)]
pub struct DeleteMemberCommand {
    pub member_id: MemberId,
}

pub struct DeleteMemberHandler {
    repository: Arc<dyn MemberRepository>,
}

impl DeleteMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: DeleteMemberCommand) -> Result<(), MemberError> {
        let removed = self.repository.delete(&command.member_id).await?;
        if !removed {
            return Err(MemberError::NotFound(command.member_id));
        }
        tracing::info!(member_id = %command.member_id, "member deleted");
        Ok(())
    }
}
