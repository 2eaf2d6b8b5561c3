use super::CaseworkService;
use crate::auth::access::AccessIntent;
use crate::core::models::{
    Employee, Intervention, InterventionKind, InterventionUpdate, NewIntervention,
};
use crate::utils::error::{CaseworkError, Result};
use tracing::info;
use uuid::Uuid;

impl CaseworkService {
    pub async fn list_interventions(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        kind: Option<InterventionKind>,
    ) -> Result<Vec<Intervention>> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Read)
            .await?;
        self.db().list_interventions(case_id, kind).await
    }

    pub async fn get_intervention(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        intervention_id: Uuid,
    ) -> Result<Intervention> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Read)
            .await?;
        self.db()
            .find_intervention(case_id, intervention_id)
            .await?
            .ok_or_else(|| CaseworkError::not_found("intervention not found"))
    }

    pub async fn create_intervention(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        input: NewIntervention,
    ) -> Result<Intervention> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Mutate)
            .await?;
        let author = super::require_requester(requester)?;
        check_details(&input.details)?;

        let intervention = self
            .db()
            .create_intervention(case_id, input.kind, input.details, author.id)
            .await?;
        info!(
            "{} intervention #{} recorded on case {} by {}",
            intervention.kind, intervention.intervention_number, case_id, author.id
        );
        Ok(intervention)
    }

    pub async fn update_intervention(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        intervention_id: Uuid,
        update: InterventionUpdate,
    ) -> Result<Intervention> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Mutate)
            .await?;
        check_details(&update.details)?;

        self.db()
            .update_intervention(case_id, intervention_id, update.details)
            .await
    }
}

fn check_details(details: &serde_json::Value) -> Result<()> {
    if details.is_object() {
        Ok(())
    } else {
        Err(CaseworkError::validation(
            "intervention details must be a JSON object",
        ))
    }
}
