use super::{CaseworkService, require_requester, require_role};
use crate::auth::access::AccessIntent;
use crate::core::models::{
    CaseScope, Employee, NewSponsoredMember, Role, SponsoredMember, SponsoredMemberUpdate,
};
use crate::utils::error::{CaseworkError, Result};
use crate::utils::required_text;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

const CASE_MANAGERS: &[Role] = &[Role::Head, Role::Supervisor];

/// Body of a caseworker reassignment
#[derive(Debug, Clone, Deserialize)]
pub struct ReassignRequest {
    pub caseworker: Uuid,
    /// Version the client last saw
    #[serde(default)]
    pub version: Option<i32>,
}

impl CaseworkService {
    /// Cases visible to the requester, newest first
    pub async fn list_cases(
        &self,
        requester: Option<&Employee>,
        active: Option<bool>,
    ) -> Result<Vec<SponsoredMember>> {
        let requester = require_requester(requester)?;
        let scope = self.case_scope(requester).await?;
        self.db().list_cases(&scope, active).await
    }

    pub async fn get_case(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
    ) -> Result<SponsoredMember> {
        let authorized = self
            .guard()
            .authorize(requester, case_id, AccessIntent::Read)
            .await?;
        Ok(authorized.case)
    }

    /// Register a new case under an active caseworker
    pub async fn create_case(
        &self,
        requester: Option<&Employee>,
        input: NewSponsoredMember,
    ) -> Result<SponsoredMember> {
        let requester = require_requester(requester)?;
        require_role(requester, CASE_MANAGERS, "create cases")?;

        let sm_number = required_text("sm_number", &input.sm_number)?;
        let first_name = required_text("first_name", &input.first_name)?;
        let last_name = required_text("last_name", &input.last_name)?;

        self.check_assignable(requester, input.assigned_caseworker)
            .await?;
        if let Some(spu) = input.spu {
            self.require_spu(spu).await?;
        }

        if self.db().find_case_by_sm_number(&sm_number).await?.is_some() {
            return Err(CaseworkError::conflict(format!(
                "case with SM number {} already exists",
                sm_number
            )));
        }

        let now = Utc::now();
        let case = SponsoredMember {
            id: Uuid::new_v4(),
            sm_number,
            first_name,
            middle_name: input.middle_name,
            last_name,
            sex: input.sex,
            date_of_birth: input.date_of_birth,
            address: input.address,
            problem_presented: input.problem_presented,
            observation_findings: input.observation_findings,
            assigned_caseworker: input.assigned_caseworker,
            spu: input.spu,
            is_active: true,
            version: 0,
            created_at: now,
            updated_at: now,
        };

        let case = self.db().create_case(&case).await?;
        info!(
            "Case {} created by {} for caseworker {}",
            case.sm_number, requester.id, case.assigned_caseworker
        );
        Ok(case)
    }

    pub async fn update_case(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        update: SponsoredMemberUpdate,
    ) -> Result<SponsoredMember> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Mutate)
            .await?;

        if let Some(name) = &update.first_name {
            required_text("first_name", name)?;
        }
        if let Some(name) = &update.last_name {
            required_text("last_name", name)?;
        }
        if let Some(spu) = update.spu {
            self.require_spu(spu).await?;
        }

        self.db().update_case(case_id, &update).await
    }

    /// Move a case to another caseworker
    pub async fn reassign_case(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        request: ReassignRequest,
    ) -> Result<SponsoredMember> {
        let employee = require_requester(requester)?;
        require_role(employee, CASE_MANAGERS, "reassign cases")?;

        let authorized = self
            .guard()
            .authorize(requester, case_id, AccessIntent::Mutate)
            .await?;
        if authorized.case.assigned_caseworker == request.caseworker {
            return Ok(authorized.case);
        }

        self.check_assignable(employee, request.caseworker).await?;

        let case = self
            .db()
            .reassign_case(case_id, request.caseworker, request.version)
            .await?;
        info!(
            "Case {} reassigned to {} by {}",
            case.id, case.assigned_caseworker, employee.id
        );
        Ok(case)
    }

    /// The caseworker must be active, hold a known role and, for a
    /// supervisor, stay inside what the supervisor can see
    async fn check_assignable(&self, requester: &Employee, caseworker_id: Uuid) -> Result<()> {
        let caseworker = self
            .db()
            .find_employee_by_id(caseworker_id)
            .await?
            .ok_or_else(|| CaseworkError::validation("assigned caseworker does not exist"))?;

        if !caseworker.is_active {
            return Err(CaseworkError::validation(
                "assigned caseworker is deactivated",
            ));
        }
        if !caseworker.role.is_recognized() {
            return Err(CaseworkError::validation(
                "assigned caseworker has an invalid role",
            ));
        }

        match self.case_scope(requester).await? {
            CaseScope::All => Ok(()),
            CaseScope::HandledBy(ids) if ids.contains(&caseworker.id) => Ok(()),
            CaseScope::HandledBy(_) => Err(CaseworkError::access_denied(
                "caseworker not under your supervision",
            )),
        }
    }

    pub(super) async fn require_spu(&self, spu_id: Uuid) -> Result<()> {
        match self.db().find_spu_by_id(spu_id).await? {
            Some(spu) if spu.is_active => Ok(()),
            Some(_) => Err(CaseworkError::validation("SPU is inactive")),
            None => Err(CaseworkError::validation("SPU does not exist")),
        }
    }
}
