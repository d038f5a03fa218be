//! GetMemberHandler - fetch one member, opportunistically promoting a
//! due pending period.
//!
//! The read path performs the same activation merge a renewal write
//! would: when the stored pending period is flagged and its scheduled
//! start has elapsed, it is merged into the active period before the
//! member is returned. There is no background scheduler; this poll and
//! the explicit activation call are the only promotion triggers.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};
use crate::ports::{Clock, MemberRepository};

/// Query for a single member by id.
#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub member_id: MemberId,
}

/// Handler for fetching a member.
pub struct GetMemberHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl GetMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, query: GetMemberQuery) -> Result<Member, MemberError> {
        let mut member = self
            .repository
            .find_by_id(&query.member_id)
            .await?
            .ok_or(MemberError::NotFound(query.member_id))?;

        if member.poll_pending(self.clock.now()) {
            match self.repository.update(&member).await {
                Ok(()) => {
                    tracing::info!(member_id = %member.id, "pending period activated on read");
                }
                Err(MemberError::VersionConflict(_)) => {
                    // Someone else won the race; serve their result.
                    member = self
                        .repository
                        .find_by_id(&query.member_id)
                        .await?
                        .ok_or(MemberError::NotFound(query.member_id))?;
                }
                Err(other) => return Err(other),
            }
        }

        Ok(member)
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

    async fn seed_with_future_pending(repo: &InMemoryMemberRepository) -> MemberId {
        let now = date(2024, 1, 15);
        let mut member = Member::create(
            MemberId::new(),
            MemberDraft {
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                phone: String::new(),
                photo_url: None,
                join_date: Some(now),
                months: 3,
                total_fee: 3000.0,
            },
            now,
        )
        .unwrap();
        repo.insert(&member).await.unwrap();

        member
            .renew(
                &RenewalRequest {
                    months: 1,
                    total_fee: 900.0,
                    start_date: Some(date(2024, 2, 14)),
                    start_after_days: None,
                },
                date(2024, 1, 20),
            )
            .unwrap();
        repo.update(&member).await.unwrap();
        member.id
    }

    #[tokio::test]
    async fn read_before_scheduled_start_leaves_state_unchanged() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let id = seed_with_future_pending(&repo).await;

        let handler = GetMemberHandler::new(repo.clone(), Arc::new(FixedClock(date(2024, 2, 10))));
        let member = handler.handle(GetMemberQuery { member_id: id }).await.unwrap();

        assert!(member.next_period.is_some());
        assert!(member.last_renewal.is_none());
    }

    #[tokio::test]
    async fn read_after_scheduled_start_activates_and_persists() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let id = seed_with_future_pending(&repo).await;

        let poll_time = date(2024, 2, 20);
        let handler = GetMemberHandler::new(repo.clone(), Arc::new(FixedClock(poll_time)));
        let member = handler.handle(GetMemberQuery { member_id: id }).await.unwrap();

        assert!(member.next_period.is_none());
        assert_eq!(member.period.join_date, date(2024, 2, 14));
        assert_eq!(member.period.expiry_date, date(2024, 3, 14));
        assert_eq!(member.last_renewal, Some(poll_time));

        // The merge was written back, not just computed
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored, member);
    }

    #[tokio::test]
    async fn missing_member_is_not_found() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let handler = GetMemberHandler::new(repo, Arc::new(FixedClock(date(2024, 1, 1))));

        let err = handler
            .handle(GetMemberQuery {
                member_id: MemberId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, MemberError::NotFound(_)));
    }
}
