use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};
use crate::ports::{Clock, MemberRepository};

/// Command to change the terms of an already-scheduled upcoming period.
#[derive(Debug, Clone)]
pub struct EditPendingPeriodCommand {
    pub member_id: MemberId,
    pub months: i64,
    pub total_fee: f64,
}

pub struct EditPendingPeriodHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl EditPendingPeriodHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, command: EditPendingPeriodCommand) -> Result<Member, MemberError> {
        let mut member = self
            .repository
            .find_by_id(&command.member_id)
            .await?
            .ok_or(MemberError::NotFound(command.member_id))?;

        member.edit_pending(command.months, command.total_fee, self.clock.now())?;
        self.repository.update(&member).await?;

        tracing::info!(member_id = %member.id, months = command.months, "pending period edited");
        Ok(member)
    }
}
