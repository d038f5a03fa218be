//! MongoDB-backed member repository.
//!
//! Members are stored as one document per aggregate. Every write
//! replaces the whole document, filtered on the previous version so
//! concurrent writers lose cleanly instead of interleaving.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use serde::{Deserialize, Serialize};

use crate::domain::billing::{BillingPeriod, PendingPeriod};
use crate::domain::foundation::{MemberId, Timestamp};
use crate::domain::member::{Member, MemberError};
use crate::ports::MemberRepository;

use super::database::MongoDb;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDocument {
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub join_date: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub expiry_date: DateTime<Utc>,
    pub months: u32,
    pub fee_per_month: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingDocument {
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub join_date: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub expiry_date: DateTime<Utc>,
    pub months: u32,
    pub fee_per_month: f64,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub start_date: DateTime<Utc>,
    pub is_pending: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub photo_url: Option<String>,
    pub period: PeriodDocument,
    pub next_period: Option<PendingDocument>,
    pub last_renewal: Option<mongodb::bson::DateTime>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

impl From<&Member> for MemberDocument {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            photo_url: member.photo_url.clone(),
            period: PeriodDocument {
                join_date: *member.period.join_date.as_datetime(),
                expiry_date: *member.period.expiry_date.as_datetime(),
                months: member.period.months,
                fee_per_month: member.period.fee_per_month,
            },
            next_period: member.next_period.as_ref().map(|p| PendingDocument {
                join_date: *p.join_date.as_datetime(),
                expiry_date: *p.expiry_date.as_datetime(),
                months: p.months,
                fee_per_month: p.fee_per_month,
                start_date: *p.start_date.as_datetime(),
                is_pending: p.is_pending,
            }),
            last_renewal: member
                .last_renewal
                .map(|ts| mongodb::bson::DateTime::from_chrono(*ts.as_datetime())),
            created_at: *member.created_at.as_datetime(),
            updated_at: *member.updated_at.as_datetime(),
            version: member.version as i64,
        }
    }
}

impl TryFrom<MemberDocument> for Member {
    type Error = MemberError;

    fn try_from(doc: MemberDocument) -> Result<Self, MemberError> {
        let id: MemberId = doc
            .id
            .parse()
            .map_err(|_| MemberError::infrastructure(format!("malformed member id {}", doc.id)))?;
        Ok(Member {
            id,
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            photo_url: doc.photo_url,
            period: BillingPeriod {
                join_date: Timestamp::from_datetime(doc.period.join_date),
                expiry_date: Timestamp::from_datetime(doc.period.expiry_date),
                months: doc.period.months,
                fee_per_month: doc.period.fee_per_month,
            },
            next_period: doc.next_period.map(|p| PendingPeriod {
                join_date: Timestamp::from_datetime(p.join_date),
                expiry_date: Timestamp::from_datetime(p.expiry_date),
                months: p.months,
                fee_per_month: p.fee_per_month,
                start_date: Timestamp::from_datetime(p.start_date),
                is_pending: p.is_pending,
            }),
            last_renewal: doc
                .last_renewal
                .map(|dt| Timestamp::from_datetime(dt.to_chrono())),
            created_at: Timestamp::from_datetime(doc.created_at),
            updated_at: Timestamp::from_datetime(doc.updated_at),
            version: doc.version as u64,
        })
    }
}

pub struct MongoMemberRepository {
    db: MongoDb,
}

impl MongoMemberRepository {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for MongoMemberRepository {
    async fn insert(&self, member: &Member) -> Result<(), MemberError> {
        self.db
            .members()
            .insert_one(MemberDocument::from(member), None)
            .await
            .map_err(|e| MemberError::infrastructure(format!("insert failed: {e}")))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, MemberError> {
        let doc = self
            .db
            .members()
            .find_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(|e| MemberError::infrastructure(format!("find failed: {e}")))?;
        doc.map(Member::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Member>, MemberError> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();
        let mut cursor = self
            .db
            .members()
            .find(doc! {}, options)
            .await
            .map_err(|e| MemberError::infrastructure(format!("list failed: {e}")))?;

        let mut members = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| MemberError::infrastructure(format!("cursor failed: {e}")))?
        {
            members.push(Member::try_from(doc)?);
        }
        Ok(members)
    }

    async fn update(&self, member: &Member) -> Result<(), MemberError> {
        // Replace the whole document, but only if nobody else advanced
        // the version since this aggregate was loaded.
        let expected = member.version as i64 - 1;
        let result = self
            .db
            .members()
            .replace_one(
                doc! { "_id": member.id.to_string(), "version": expected },
                MemberDocument::from(member),
                None,
            )
            .await
            .map_err(|e| MemberError::infrastructure(format!("update failed: {e}")))?;

        if result.matched_count == 0 {
            // Distinguish a stale version from a vanished member.
            return match self.find_by_id(&member.id).await? {
                Some(_) => Err(MemberError::VersionConflict(member.id)),
                None => Err(MemberError::NotFound(member.id)),
            };
        }
        Ok(())
    }

    async fn delete(&self, id: &MemberId) -> Result<bool, MemberError> {
        let result = self
            .db
            .members()
            .delete_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(|e| MemberError::infrastructure(format!("delete failed: {e}")))?;
        Ok(result.deleted_count == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::MemberDraft;

    fn sample_member() -> Member {
        let now = Timestamp::from_ymd(2024, 1, 31).unwrap();
        let mut member = Member::create(
            MemberId::new(),
            MemberDraft {
                name: "Priya".to_string(),
                email: "priya@example.com".to_string(),
                phone: "555-0177".to_string(),
                photo_url: Some("https://images.example/p.jpg".to_string()),
                join_date: Some(now),
                months: 2,
                total_fee: 1600.0,
            },
            now,
        )
        .unwrap();
        member
            .renew(
                &crate::domain::billing::RenewalRequest {
                    months: 1,
                    total_fee: 900.0,
                    start_date: None,
                    start_after_days: None,
                },
                Timestamp::from_ymd(2024, 2, 10).unwrap(),
            )
            .unwrap();
        member
    }

    #[test]
    fn document_mapping_roundtrips() {
        let member = sample_member();
        let doc = MemberDocument::from(&member);
        let back = Member::try_from(doc).unwrap();
        assert_eq!(back, member);
    }

    #[test]
    fn malformed_id_is_an_infrastructure_error() {
        let member = sample_member();
        let mut doc = MemberDocument::from(&member);
        doc.id = "not-a-uuid".to_string();
        let err = Member::try_from(doc).unwrap_err();
        assert!(matches!(err, MemberError::Infrastructure(_)));
    }

    #[test]
    fn document_serializes_to_bson() {
        let doc = MemberDocument::from(&sample_member());
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert!(bson.contains_key("_id"));
        assert!(bson.contains_key("next_period"));
    }
}
