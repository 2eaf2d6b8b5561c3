use super::{CaseworkService, require_requester, require_role};
use crate::auth::access::AccessIntent;
use crate::core::models::{CaseClosure, ClosureStatus, Employee, Role, SponsoredMember};
use crate::utils::error::{CaseworkError, Result};
use crate::utils::required_text;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

const CLOSURE_RESOLVERS: &[Role] = &[Role::Head, Role::Supervisor];

/// Body of a closure request
#[derive(Debug, Clone, Deserialize)]
pub struct ClosureRequest {
    pub reason: String,
}

impl CaseworkService {
    /// The assigned sdw asks for the case to be closed
    pub async fn request_closure(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        request: ClosureRequest,
    ) -> Result<CaseClosure> {
        let employee = require_requester(requester)?;
        require_role(employee, &[Role::Sdw], "request case closure")?;

        self.guard()
            .authorize(requester, case_id, AccessIntent::Mutate)
            .await?;
        let reason = required_text("reason", &request.reason)?;

        let closure = self
            .db()
            .create_closure(case_id, &reason, employee.id)
            .await?;
        info!("Closure of case {} requested by {}", case_id, employee.id);
        Ok(closure)
    }

    /// Closure requests on cases the requester can see
    pub async fn list_closures(
        &self,
        requester: Option<&Employee>,
        status: Option<ClosureStatus>,
    ) -> Result<Vec<CaseClosure>> {
        let requester = require_requester(requester)?;
        let scope = self.case_scope(requester).await?;
        self.db().list_closures(&scope, status).await
    }

    /// Accept a pending request, closing its case
    pub async fn accept_closure(
        &self,
        requester: Option<&Employee>,
        closure_id: Uuid,
    ) -> Result<(CaseClosure, SponsoredMember)> {
        let employee = self.authorize_resolution(requester, closure_id).await?;
        self.db().accept_closure(closure_id, employee.id).await
    }

    /// Reject a pending request; the request is deleted
    pub async fn reject_closure(
        &self,
        requester: Option<&Employee>,
        closure_id: Uuid,
    ) -> Result<CaseClosure> {
        let employee = self.authorize_resolution(requester, closure_id).await?;
        let closure = self.db().delete_pending_closure(closure_id).await?;
        info!(
            "Closure request for case {} rejected by {}",
            closure.case, employee.id
        );
        Ok(closure)
    }

    async fn authorize_resolution<'a>(
        &self,
        requester: Option<&'a Employee>,
        closure_id: Uuid,
    ) -> Result<&'a Employee> {
        let employee = require_requester(requester)?;
        require_role(employee, CLOSURE_RESOLVERS, "resolve closure requests")?;

        let closure = self
            .db()
            .find_closure_by_id(closure_id)
            .await?
            .ok_or_else(|| CaseworkError::not_found("closure request not found"))?;

        self.guard()
            .authorize(requester, closure.case, AccessIntent::Mutate)
            .await?;

        if !closure.is_pending() {
            return Err(CaseworkError::conflict("closure request already resolved"));
        }
        Ok(employee)
    }
}
