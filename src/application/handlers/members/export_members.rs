//! ExportMembersHandler - CSV snapshot of the roster.
//!
//! The export is computed against the same clock the rest of the
//! application uses, so the status column matches what the dashboard
//! would show at the same instant.

use std::sync::Arc;

use crate::domain::member::{Member, MemberError, MemberStanding};
use crate::ports::{Clock, MemberRepository};

const HEADER: [&str; 11] = [
    "Name",
    "Email",
    "Phone",
    "Join Date",
    "Expiry Date",
    "Months",
    "Monthly Fee",
    "Status",
    "Upcoming Start",
    "Upcoming Months",
    "Last Renewal",
];

#[derive(Debug, Clone)]
pub struct ExportMembersQuery {}

pub struct ExportMembersHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl ExportMembersHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Produces the CSV document as bytes, newest member first.
    pub async fn handle(&self, _query: ExportMembersQuery) -> Result<Vec<u8>, MemberError> {
        let now = self.clock.now();
        let members = self.repository.list_all().await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .map_err(|e| MemberError::infrastructure(format!("csv write failed: {e}")))?;
        for member in &members {
            writer
                .write_record(row(member, now))
                .map_err(|e| MemberError::infrastructure(format!("csv write failed: {e}")))?;
        }
        writer
            .into_inner()
            .map_err(|e| MemberError::infrastructure(format!("csv flush failed: {e}")))
    }
}

fn row(member: &Member, now: crate::domain::foundation::Timestamp) -> Vec<String> {
    let standing = match member.standing(now) {
        MemberStanding::Active => "active",
        MemberStanding::ExpiringSoon => "expiring-soon",
        MemberStanding::Expired => "expired",
    };
    let (upcoming_start, upcoming_months) = match &member.next_period {
        Some(pending) => (day_of(pending.start_date), pending.months.to_string()),
        None => (String::new(), String::new()),
    };
    vec![
        member.name.clone(),
        member.email.clone(),
        member.phone.clone(),
        day_of(member.period.join_date),
        day_of(member.period.expiry_date),
        member.period.months.to_string(),
        format!("{:.2}", member.period.fee_per_month),
        standing.to_string(),
        upcoming_start,
        upcoming_months,
        member.last_renewal.map(day_of).unwrap_or_default(),
    ]
}

fn day_of(ts: crate::domain::foundation::Timestamp) -> String {
    ts.as_datetime().format("%Y-%m-%d").to_string()
}
