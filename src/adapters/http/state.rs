//! Shared application state and on-demand handler construction.

use std::sync::Arc;

use crate::application::handlers::auth::LoginHandler;
use crate::application::handlers::members::{
    ActivatePendingHandler, CreateMemberHandler, DeleteMemberHandler, EditPendingPeriodHandler,
    ExportMembersHandler, GetMemberHandler, ListMembersHandler, RenewSubscriptionHandler,
    UpdateMemberHandler,
};
use crate::application::handlers::photos::UploadPhotoHandler;
use crate::ports::{Authenticator, Clock, MemberRepository, PhotoStore};

/// Cloned per request; all dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub member_repository: Arc<dyn MemberRepository>,
    pub photo_store: Arc<dyn PhotoStore>,
    pub authenticator: Arc<dyn Authenticator>,
    pub clock: Arc<dyn Clock>,
    pub token_ttl_minutes: u64,
}

impl AppState {
    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.authenticator.clone(), self.token_ttl_minutes)
    }

    pub fn create_member_handler(&self) -> CreateMemberHandler {
        CreateMemberHandler::new(self.member_repository.clone(), self.clock.clone())
    }

    pub fn list_members_handler(&self) -> ListMembersHandler {
        ListMembersHandler::new(self.member_repository.clone())
    }

    pub fn get_member_handler(&self) -> GetMemberHandler {
        GetMemberHandler::new(self.member_repository.clone(), self.clock.clone())
    }

    pub fn update_member_handler(&self) -> UpdateMemberHandler {
        UpdateMemberHandler::new(self.member_repository.clone(), self.clock.clone())
    }

    pub fn delete_member_handler(&self) -> DeleteMemberHandler {
        DeleteMemberHandler::new(self.member_repository.clone())
    }

    pub fn renew_subscription_handler(&self) -> RenewSubscriptionHandler {
        RenewSubscriptionHandler::new(self.member_repository.clone(), self.clock.clone())
    }

    pub fn edit_pending_period_handler(&self) -> EditPendingPeriodHandler {
        EditPendingPeriodHandler::new(self.member_repository.clone(), self.clock.clone())
    }

    pub fn activate_pending_handler(&self) -> ActivatePendingHandler {
        ActivatePendingHandler::new(self.member_repository.clone(), self.clock.clone())
    }

    pub fn export_members_handler(&self) -> ExportMembersHandler {
        ExportMembersHandler::new(self.member_repository.clone(), self.clock.clone())
    }

    pub fn upload_photo_handler(&self) -> UploadPhotoHandler {
        UploadPhotoHandler::new(self.photo_store.clone())
    }
}
