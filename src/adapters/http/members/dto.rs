//! JSON request/response shapes for the member endpoints.
//!
//! The wire format is camelCase with RFC 3339 dates; fees travel as
//! period totals in requests and per-month amounts in responses.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::member::{Member, MemberDraft, MemberStanding, MemberUpdate};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub join_date: Option<Timestamp>,
    pub months: i64,
    pub total_fee: f64,
}

impl From<CreateMemberRequest> for MemberDraft {
    fn from(request: CreateMemberRequest) -> Self {
        MemberDraft {
            name: request.name,
            email: request.email,
            phone: request.phone,
            photo_url: request.photo_url,
            join_date: request.join_date,
            months: request.months,
            total_fee: request.total_fee,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub join_date: Option<Timestamp>,
    #[serde(default)]
    pub months: Option<i64>,
    #[serde(default)]
    pub total_fee: Option<f64>,
}

impl From<UpdateMemberRequest> for MemberUpdate {
    fn from(request: UpdateMemberRequest) -> Self {
        MemberUpdate {
            name: request.name,
            email: request.email,
            phone: request.phone,
            photo_url: request.photo_url,
            join_date: request.join_date,
            months: request.months,
            total_fee: request.total_fee,
        }
    }
}

/// Body for both creating (POST) and editing (PATCH) a renewal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendRequest {
    pub months: i64,
    pub total_fee: f64,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub start_after_days: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPeriodResponse {
    pub join_date: String,
    pub expiry_date: String,
    pub start_date: String,
    pub months: u32,
    pub fee: f64,
    pub is_pending: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub join_date: String,
    pub expiry_date: String,
    pub months: u32,
    pub fee: f64,
    pub total_fee: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_period: Option<PendingPeriodResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_renewal: Option<String>,
    pub status: MemberStanding,
    pub created_at: String,
    pub updated_at: String,
}

impl MemberResponse {
    pub fn from_member(member: &Member, now: Timestamp) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            photo_url: member.photo_url.clone(),
            join_date: member.period.join_date.to_rfc3339(),
            expiry_date: member.period.expiry_date.to_rfc3339(),
            months: member.period.months,
            fee: member.period.fee_per_month,
            total_fee: member.period.total_fee(),
            next_period: member.next_period.as_ref().map(|p| PendingPeriodResponse {
                join_date: p.join_date.to_rfc3339(),
                expiry_date: p.expiry_date.to_rfc3339(),
                start_date: p.start_date.to_rfc3339(),
                months: p.months,
                fee: p.fee_per_month,
                is_pending: p.is_pending,
            }),
            last_renewal: member.last_renewal.map(|ts| ts.to_rfc3339()),
            status: member.standing(now),
            created_at: member.created_at.to_rfc3339(),
            updated_at: member.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendResponse {
    pub activated: bool,
    pub member: MemberResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
