use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};
use crate::ports::{Clock, MemberRepository};

/// Command to promote a due upcoming period into the active one.
#[derive(Debug, Clone)]
pub struct ActivatePendingCommand {
    pub member_id: MemberId,
}

#[derive(Debug, Clone)]
pub struct ActivatePendingResult {
    pub member: Member,
    /// False when there was no pending period or its start is still in
    /// the future; the call is a no-op in that case.
    pub activated: bool,
}

pub struct ActivatePendingHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl ActivatePendingHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        command: ActivatePendingCommand,
    ) -> Result<ActivatePendingResult, MemberError> {
        let mut member = self
            .repository
            .find_by_id(&command.member_id)
            .await?
            .ok_or(MemberError::NotFound(command.member_id))?;

        let activated = member.activate_if_due(self.clock.now());
        if activated {
            self.repository.update(&member).await?;
            tracing::info!(member_id = %member.id, "pending period activated");
        }

        Ok(ActivatePendingResult { member, activated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMemberRepository;
    use crate::domain::billing::RenewalRequest;
    use crate::domain::foundation::Timestamp;
    use crate::domain::member::MemberDraft;
    use crate::ports::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    async fn seed_with_queued(repo: &InMemoryMemberRepository) -> MemberId {
        let now = date(2024, 1, 1);
        let mut member = Member::create(
            MemberId::new(),
            MemberDraft {
                name: "Iris".to_string(),
                email: "iris@example.com".to_string(),
                phone: String::new(),
                photo_url: None,
                join_date: Some(now),
                months: 1,
                total_fee: 800.0,
            },
            now,
        )
        .unwrap();
        // Chains from expiry, so the queued period is not flagged and
        // the read path will never auto-merge it.
        member
            .renew(
                &RenewalRequest {
                    months: 2,
                    total_fee: 1500.0,
                    start_date: None,
                    start_after_days: None,
                },
                date(2024, 1, 10),
            )
            .unwrap();
        repo.insert(&member).await.unwrap();
        member.id
    }

    #[tokio::test]
    async fn activates_queued_period_once_due() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let id = seed_with_queued(&repo).await;

        let now = date(2024, 2, 5);
        let handler = ActivatePendingHandler::new(repo.clone(), Arc::new(FixedClock(now)));
        let result = handler
            .handle(ActivatePendingCommand { member_id: id })
            .await
            .unwrap();

        assert!(result.activated);
        assert!(result.member.next_period.is_none());
        assert_eq!(result.member.period.join_date, date(2024, 2, 1));
        assert_eq!(result.member.period.expiry_date, date(2024, 4, 1));
        assert_eq!(result.member.last_renewal, Some(now));
    }

    #[tokio::test]
    async fn not_yet_due_is_a_noop() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let id = seed_with_queued(&repo).await;

        let handler =
            ActivatePendingHandler::new(repo.clone(), Arc::new(FixedClock(date(2024, 1, 20))));
        let result = handler
            .handle(ActivatePendingCommand { member_id: id })
            .await
            .unwrap();

        assert!(!result.activated);
        assert!(result.member.next_period.is_some());

        // Nothing was written
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.version, result.member.version);
    }

    #[tokio::test]
    async fn no_pending_period_is_a_noop() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let member = Member::create(
            MemberId::new(),
            MemberDraft {
                name: "Omar".to_string(),
                email: "omar@example.com".to_string(),
                phone: String::new(),
                photo_url: None,
                join_date: None,
                months: 1,
                total_fee: 600.0,
            },
            date(2024, 1, 1),
        )
        .unwrap();
        repo.insert(&member).await.unwrap();

        let handler = ActivatePendingHandler::new(repo, Arc::new(FixedClock(date(2024, 6, 1))));
        let result = handler
            .handle(ActivatePendingCommand { member_id: member.id })
            .await
            .unwrap();
        assert!(!result.activated);
    }
}
