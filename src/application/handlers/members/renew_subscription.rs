//! RenewSubscriptionHandler - the write side of the renewal state
//! machine.
//!
//! The handler loads the member, lets the aggregate decide between
//! immediate activation and queueing, and persists the whole new state
//! in one compare-and-swap write.

use std::sync::Arc;

use crate::domain::billing::RenewalRequest;
use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};
use crate::ports::{Clock, MemberRepository};

#[derive(Debug, Clone)]
pub struct RenewSubscriptionCommand {
    pub member_id: MemberId,
    pub request: RenewalRequest,
}

/// Outcome of a renewal, for response-message selection.
#[derive(Debug, Clone)]
pub struct RenewSubscriptionResult {
    pub member: Member,
    /// True when the new period became active immediately.
    pub activated: bool,
}

pub struct RenewSubscriptionHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl RenewSubscriptionHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        command: RenewSubscriptionCommand,
    ) -> Result<RenewSubscriptionResult, MemberError> {
        let mut member = self
            .repository
            .find_by_id(&command.member_id)
            .await?
            .ok_or(MemberError::NotFound(command.member_id))?;

        let activated = member.renew(&command.request, self.clock.now())?;
        self.repository.update(&member).await?;

        tracing::info!(
            member_id = %member.id,
            activated,
            months = command.request.months,
            "subscription renewed"
        );
        Ok(RenewSubscriptionResult { member, activated })
    }
}
