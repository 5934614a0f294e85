use std::sync::Arc;
use chrono::{Duration, NaiveDate};
use tracing::info;

use crate::domain::models::membership::{MembershipOwner, NewOwnershipParams};
use crate::domain::ports::{Clock, MembershipRepository};
use crate::error::AppError;

/// Whether the ownership covers `today`. Answered lazily on read; the
/// stored `is_active` column is only a creation-time default and is never
/// recomputed in the background.
pub fn is_currently_active(owner: &MembershipOwner, today: NaiveDate) -> bool {
    match owner.end_date {
        Some(end_date) => today <= end_date,
        None => false,
    }
}

pub struct EntitlementService {
    membership_repo: Arc<dyn MembershipRepository>,
    clock: Arc<dyn Clock>,
}

impl EntitlementService {
    pub fn new(membership_repo: Arc<dyn MembershipRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { membership_repo, clock }
    }

    /// Fills the unset dates (start defaults to today, end to
    /// `start + duration_days`) and persists the ownership.
    pub async fn finalize_ownership(&self, params: NewOwnershipParams) -> Result<MembershipOwner, AppError> {
        let membership = self.membership_repo.find_by_id(&params.membership_id).await?
            .ok_or_else(|| AppError::NotFound("Membership not found".into()))?;

        let start_date = params.start_date.unwrap_or_else(|| self.clock.today());
        let mut owner = MembershipOwner::new(params, start_date);
        if owner.end_date.is_none() {
            owner.end_date = Some(start_date + Duration::days(membership.duration_days as i64));
        }

        let created = self.membership_repo.create_owner(&owner).await?;
        info!(
            "Membership ownership {} finalized: {} until {:?}",
            created.id, created.start_date, created.end_date
        );
        Ok(created)
    }

    /// Read-side activity check against the injected clock.
    pub fn active_now(&self, owner: &MembershipOwner) -> bool {
        is_currently_active(owner, self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ownership(end: Option<NaiveDate>) -> MembershipOwner {
        MembershipOwner {
            id: "o1".into(),
            member_id: "m1".into(),
            membership_id: "ms1".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: end,
            is_active: true,
        }
    }

    #[test]
    fn active_through_end_date_inclusive() {
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let owner = ownership(Some(end));

        assert!(is_currently_active(&owner, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        assert!(is_currently_active(&owner, end));
        assert!(!is_currently_active(&owner, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }

    #[test]
    fn never_active_without_end_date() {
        let owner = ownership(None);
        assert!(!is_currently_active(&owner, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    }
}
