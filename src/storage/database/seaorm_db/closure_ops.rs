use crate::core::models::{CaseClosure, CaseScope, ClosureStatus, SponsoredMember};
use crate::utils::error::{CaseworkError, Result};
use chrono::Utc;
use sea_orm::*;
use tracing::{debug, info};
use uuid::Uuid;

use super::super::entities::{self, case_closure};
use super::case_ops::{case_ids_in_scope, commit_case, load_open_case};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    pub async fn find_closure_by_id(&self, closure_id: Uuid) -> Result<Option<CaseClosure>> {
        debug!("Finding closure request by ID: {}", closure_id);

        let model = entities::CaseClosure::find_by_id(closure_id)
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.map(|m| m.to_domain_closure()))
    }

    pub async fn find_closure_by_case(&self, case_id: Uuid) -> Result<Option<CaseClosure>> {
        let model = entities::CaseClosure::find()
            .filter(case_closure::Column::CaseId.eq(case_id))
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.map(|m| m.to_domain_closure()))
    }

    /// List closure requests on cases inside `scope`, oldest first
    pub async fn list_closures(
        &self,
        scope: &CaseScope,
        status: Option<ClosureStatus>,
    ) -> Result<Vec<CaseClosure>> {
        let case_ids = case_ids_in_scope(&self.db, scope).await?;

        let mut query = entities::CaseClosure::find();
        if let Some(ids) = case_ids {
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(case_closure::Column::CaseId.is_in(ids));
        }
        if let Some(status) = status {
            query = query.filter(case_closure::Column::Status.eq(status.as_str()));
        }

        let models = query
            .order_by_asc(case_closure::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_closure()).collect())
    }

    /// File a pending closure request for an open case
    pub async fn create_closure(
        &self,
        case_id: Uuid,
        reason: &str,
        requested_by: Uuid,
    ) -> Result<CaseClosure> {
        debug!("Requesting closure of case: {}", case_id);

        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;
        load_open_case(&txn, case_id, None).await?;

        let existing = entities::CaseClosure::find()
            .filter(case_closure::Column::CaseId.eq(case_id))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(CaseworkError::conflict(
                "a closure request already exists for this case",
            ));
        }

        let now = Utc::now();
        let closure = CaseClosure {
            id: Uuid::new_v4(),
            case: case_id,
            status: ClosureStatus::Pending,
            reason: reason.to_string(),
            requested_by,
            resolved_by: None,
            created_at: now,
            updated_at: now,
        };

        entities::CaseClosure::insert(case_closure::Model::from_domain_closure(&closure))
            .exec(&txn)
            .await
            .map_err(|e| write_error(e, "closure request for this case"))?;
        txn.commit().await.map_err(CaseworkError::Database)?;

        Ok(closure)
    }

    /// Accept a pending request and close its case in one transaction
    pub async fn accept_closure(
        &self,
        closure_id: Uuid,
        resolved_by: Uuid,
    ) -> Result<(CaseClosure, SponsoredMember)> {
        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;

        let mut closure = entities::CaseClosure::find_by_id(closure_id)
            .one(&txn)
            .await?
            .ok_or_else(|| CaseworkError::not_found("closure request not found"))?
            .to_domain_closure();

        if !closure.is_pending() {
            return Err(CaseworkError::conflict("closure request already resolved"));
        }

        let mut case = load_open_case(&txn, closure.case, None).await?;
        case.is_active = false;
        let case = commit_case(&txn, case).await?;

        closure.status = ClosureStatus::Accepted;
        closure.resolved_by = Some(resolved_by);
        closure.updated_at = Utc::now();

        let result = entities::CaseClosure::update_many()
            .set(case_closure::Model::from_domain_closure(&closure))
            .filter(case_closure::Column::Id.eq(closure_id))
            .filter(case_closure::Column::Status.eq(ClosureStatus::Pending.as_str()))
            .exec(&txn)
            .await?;
        if result.rows_affected == 0 {
            return Err(CaseworkError::conflict("closure request already resolved"));
        }

        txn.commit().await.map_err(CaseworkError::Database)?;

        info!("Case {} closed by {}", case.id, resolved_by);
        Ok((closure, case))
    }

    /// Delete a pending request
    pub async fn delete_pending_closure(&self, closure_id: Uuid) -> Result<CaseClosure> {
        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;

        let closure = entities::CaseClosure::find_by_id(closure_id)
            .one(&txn)
            .await?
            .ok_or_else(|| CaseworkError::not_found("closure request not found"))?
            .to_domain_closure();

        if !closure.is_pending() {
            return Err(CaseworkError::conflict("closure request already resolved"));
        }

        entities::CaseClosure::delete_by_id(closure_id)
            .exec(&txn)
            .await?;
        txn.commit().await.map_err(CaseworkError::Database)?;

        debug!("Closure request {} deleted", closure_id);
        Ok(closure)
    }
}
