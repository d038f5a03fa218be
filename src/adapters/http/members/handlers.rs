//! HTTP handlers for the member endpoints.

use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::members::{
    ActivatePendingCommand, CreateMemberCommand, DeleteMemberCommand, EditPendingPeriodCommand,
    ExportMembersQuery, GetMemberQuery, ListMembersQuery, RenewSubscriptionCommand,
    UpdateMemberCommand,
};
use crate::domain::billing::RenewalRequest;
use crate::domain::foundation::MemberId;
use crate::domain::member::MemberError;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    CreateMemberRequest, DeleteResponse, ExtendRequest, ExtendResponse, MemberListResponse,
    MemberResponse, UpdateMemberRequest,
};

fn parse_member_id(raw: &str) -> Result<MemberId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError(MemberError::validation("id", "must be a UUID")))
}

/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_member_handler();
    let result = handler
        .handle(CreateMemberCommand {
            draft: request.into(),
        })
        .await?;

    let now = state.clock.now();
    let response = MemberResponse::from_member(&result.member, now);
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_members_handler();
    let members = handler.handle(ListMembersQuery {}).await?;

    let now = state.clock.now();
    let response = MemberListResponse {
        members: members
            .iter()
            .map(|m| MemberResponse::from_member(m, now))
            .collect(),
    };
    Ok(Json(response))
}

/// GET /api/members/:id
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let handler = state.get_member_handler();
    let member = handler.handle(GetMemberQuery { member_id }).await?;

    let response = MemberResponse::from_member(&member, state.clock.now());
    Ok(Json(response))
}

/// PUT /api/members/:id
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let handler = state.update_member_handler();
    let member = handler
        .handle(UpdateMemberCommand {
            member_id,
            update: request.into(),
        })
        .await?;

    let response = MemberResponse::from_member(&member, state.clock.now());
    Ok(Json(response))
}

/// DELETE /api/members/:id
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let handler = state.delete_member_handler();
    handler.handle(DeleteMemberCommand { member_id }).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// POST /api/members/:id/extend
pub async fn extend_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ExtendRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let handler = state.renew_subscription_handler();
    let result = handler
        .handle(RenewSubscriptionCommand {
            member_id,
            request: RenewalRequest {
                months: request.months,
                total_fee: request.total_fee,
                start_date: request.start_date,
                start_after_days: request.start_after_days,
            },
        })
        .await?;

    let response = ExtendResponse {
        activated: result.activated,
        member: MemberResponse::from_member(&result.member, state.clock.now()),
    };
    Ok(Json(response))
}

/// PATCH /api/members/:id/extend
pub async fn edit_pending_period(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ExtendRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let handler = state.edit_pending_period_handler();
    let member = handler
        .handle(EditPendingPeriodCommand {
            member_id,
            months: request.months,
            total_fee: request.total_fee,
        })
        .await?;

    let response = MemberResponse::from_member(&member, state.clock.now());
    Ok(Json(response))
}

/// POST /api/members/:id/activate
pub async fn activate_pending(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let handler = state.activate_pending_handler();
    let result = handler.handle(ActivatePendingCommand { member_id }).await?;

    let response = ExtendResponse {
        activated: result.activated,
        member: MemberResponse::from_member(&result.member, state.clock.now()),
    };
    Ok(Json(response))
}

/// GET /api/members/export
pub async fn export_members(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.export_members_handler();
    let csv = handler.handle(ExportMembersQuery {}).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"members.csv\"",
        ),
    ];
    Ok((headers, csv))
}
