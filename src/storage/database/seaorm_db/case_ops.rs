use crate::core::models::{CaseScope, SponsoredMember, SponsoredMemberUpdate};
use crate::utils::error::{CaseworkError, Result};
use chrono::Utc;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, sponsored_member};
use super::types::{SeaOrmDatabase, write_error};

/// Read a case on `conn` and require it to be open.
///
/// `expected_version`, when given, must equal the stored version.
pub(super) async fn load_open_case<C: ConnectionTrait>(
    conn: &C,
    case_id: Uuid,
    expected_version: Option<i32>,
) -> Result<SponsoredMember> {
    let model = entities::SponsoredMember::find_by_id(case_id)
        .one(conn)
        .await?
        .ok_or_else(|| CaseworkError::not_found("case not found"))?;

    if !model.is_active {
        return Err(CaseworkError::conflict("case is closed"));
    }

    if let Some(expected) = expected_version {
        if expected != model.version {
            return Err(CaseworkError::conflict(format!(
                "case has been modified (expected version {}, found {})",
                expected, model.version
            )));
        }
    }

    Ok(model.to_domain_case())
}

/// Write `changed` back if the stored row is still open at `changed.version`.
///
/// The written row carries the next version. Zero matched rows means another
/// writer got there first.
pub(super) async fn commit_case<C: ConnectionTrait>(
    conn: &C,
    mut changed: SponsoredMember,
) -> Result<SponsoredMember> {
    let observed = changed.version;
    changed.version = observed + 1;
    changed.updated_at = Utc::now();

    let result = entities::SponsoredMember::update_many()
        .set(sponsored_member::Model::from_domain_case(&changed))
        .filter(sponsored_member::Column::Id.eq(changed.id))
        .filter(sponsored_member::Column::Version.eq(observed))
        .filter(sponsored_member::Column::IsActive.eq(true))
        .exec(conn)
        .await
        .map_err(|e| write_error(e, "case"))?;

    if result.rows_affected == 0 {
        return Err(CaseworkError::conflict("case was modified concurrently"));
    }

    debug!("Case {} now at version {}", changed.id, changed.version);
    Ok(changed)
}

/// Ids of the cases inside `scope`; `None` means no restriction
pub(super) async fn case_ids_in_scope<C: ConnectionTrait>(
    conn: &C,
    scope: &CaseScope,
) -> Result<Option<Vec<Uuid>>> {
    match scope {
        CaseScope::All => Ok(None),
        CaseScope::HandledBy(handlers) if handlers.is_empty() => Ok(Some(Vec::new())),
        CaseScope::HandledBy(handlers) => {
            let ids = entities::SponsoredMember::find()
                .select_only()
                .column(sponsored_member::Column::Id)
                .filter(sponsored_member::Column::AssignedCaseworkerId.is_in(handlers.clone()))
                .into_tuple::<Uuid>()
                .all(conn)
                .await?;
            Ok(Some(ids))
        }
    }
}

impl SeaOrmDatabase {
    /// Find case by ID
    pub async fn find_case_by_id(&self, case_id: Uuid) -> Result<Option<SponsoredMember>> {
        debug!("Finding case by ID: {}", case_id);

        let model = entities::SponsoredMember::find_by_id(case_id)
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.map(|m| m.to_domain_case()))
    }

    /// Find case by its member number
    pub async fn find_case_by_sm_number(&self, sm_number: &str) -> Result<Option<SponsoredMember>> {
        let model = entities::SponsoredMember::find()
            .filter(sponsored_member::Column::SmNumber.eq(sm_number))
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.map(|m| m.to_domain_case()))
    }

    /// List cases inside `scope`, newest first
    pub async fn list_cases(
        &self,
        scope: &CaseScope,
        active: Option<bool>,
    ) -> Result<Vec<SponsoredMember>> {
        debug!("Listing cases for scope: {:?}", scope);

        if scope.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entities::SponsoredMember::find();
        if let CaseScope::HandledBy(handlers) = scope {
            query = query
                .filter(sponsored_member::Column::AssignedCaseworkerId.is_in(handlers.clone()));
        }
        if let Some(active) = active {
            query = query.filter(sponsored_member::Column::IsActive.eq(active));
        }

        let models = query
            .order_by_desc(sponsored_member::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_case()).collect())
    }

    /// Insert a new case
    pub async fn create_case(&self, case: &SponsoredMember) -> Result<SponsoredMember> {
        debug!("Creating case: {}", case.sm_number);

        entities::SponsoredMember::insert(sponsored_member::Model::from_domain_case(case))
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, "case with this SM number"))?;

        Ok(case.clone())
    }

    /// Apply a profile update to an open case
    pub async fn update_case(
        &self,
        case_id: Uuid,
        update: &SponsoredMemberUpdate,
    ) -> Result<SponsoredMember> {
        debug!("Updating case: {}", case_id);

        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;
        let mut case = load_open_case(&txn, case_id, update.version).await?;
        update.apply_to(&mut case);
        let case = commit_case(&txn, case).await?;
        txn.commit().await.map_err(CaseworkError::Database)?;

        Ok(case)
    }

    /// Hand an open case to another caseworker
    pub async fn reassign_case(
        &self,
        case_id: Uuid,
        caseworker_id: Uuid,
        expected_version: Option<i32>,
    ) -> Result<SponsoredMember> {
        debug!("Reassigning case {} to {}", case_id, caseworker_id);

        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;
        let mut case = load_open_case(&txn, case_id, expected_version).await?;
        case.assigned_caseworker = caseworker_id;
        let case = commit_case(&txn, case).await?;
        txn.commit().await.map_err(CaseworkError::Database)?;

        Ok(case)
    }

    /// Number of open cases currently assigned to `employee_id`
    pub async fn count_open_cases_handled_by(&self, employee_id: Uuid) -> Result<u64> {
        entities::SponsoredMember::find()
            .filter(sponsored_member::Column::AssignedCaseworkerId.eq(employee_id))
            .filter(sponsored_member::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(CaseworkError::Database)
    }
}
