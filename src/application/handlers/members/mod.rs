//! Member roster handlers: CRUD, renewal, pending-period lifecycle,
//! CSV export.

mod activate_pending;
mod create_member;
mod delete_member;
mod edit_pending_period;
mod export_members;
mod get_member;
mod list_members;
mod renew_subscription;
mod update_member;

pub use activate_pending::{ActivatePendingCommand, ActivatePendingHandler, ActivatePendingResult};
pub use create_member::{CreateMemberCommand, CreateMemberHandler, CreateMemberResult};
pub use delete_member::{DeleteMemberCommand, DeleteMemberHandler};
pub use edit_pending_period::{EditPendingPeriodCommand, EditPendingPeriodHandler};
pub use export_members::{ExportMembersHandler, ExportMembersQuery};
pub use get_member::{GetMemberHandler, GetMemberQuery};
pub use list_members::{ListMembersHandler, ListMembersQuery};
pub use renew_subscription::{
    RenewSubscriptionCommand, RenewSubscriptionHandler, RenewSubscriptionResult,
};
pub use update_member::{UpdateMemberCommand, UpdateMemberHandler};
