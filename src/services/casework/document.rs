//! Field set behind a printable case document.
//!
//! Templating is left to the consumer; this assembles everything a template
//! would be filled from.

use super::CaseworkService;
use crate::auth::access::AccessIntent;
use crate::core::models::{
    CaseClosure, Employee, Intervention, ProgressReport, SponsoredMember, Spu,
};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Public view of an employee inside a document
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeSummary {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.full_name(),
            role: employee.role.to_string(),
        }
    }
}

/// Everything about one case, ready for a document template
#[derive(Debug, Clone, Serialize)]
pub struct CaseDocument {
    /// Flat placeholder values, keyed by template field name
    pub fields: BTreeMap<String, String>,
    pub case: SponsoredMember,
    pub caseworker: Option<EmployeeSummary>,
    pub spu: Option<Spu>,
    /// Keyed by intervention kind
    pub interventions: BTreeMap<String, Vec<Intervention>>,
    pub progress_reports: Vec<ProgressReport>,
    pub closure: Option<CaseClosure>,
    pub generated_at: DateTime<Utc>,
}

impl CaseworkService {
    pub async fn case_document(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
    ) -> Result<CaseDocument> {
        let authorized = self
            .guard()
            .authorize(requester, case_id, AccessIntent::Read)
            .await?;
        let case = authorized.case;

        let spu = match case.spu {
            Some(spu_id) => self.db().find_spu_by_id(spu_id).await?,
            None => None,
        };

        let mut interventions: BTreeMap<String, Vec<Intervention>> = BTreeMap::new();
        for intervention in self.db().list_interventions(case.id, None).await? {
            interventions
                .entry(intervention.kind.as_str().to_string())
                .or_default()
                .push(intervention);
        }

        let progress_reports = self.db().list_progress_reports(case.id).await?;
        let closure = self.db().find_closure_by_case(case.id).await?;
        let caseworker = authorized.handler.as_ref().map(EmployeeSummary::from);
        let generated_at = Utc::now();

        Ok(CaseDocument {
            fields: template_fields(&case, caseworker.as_ref(), spu.as_ref(), generated_at),
            case,
            caseworker,
            spu,
            interventions,
            progress_reports,
            closure,
            generated_at,
        })
    }
}

fn template_fields(
    case: &SponsoredMember,
    caseworker: Option<&EmployeeSummary>,
    spu: Option<&Spu>,
    generated_at: DateTime<Utc>,
) -> BTreeMap<String, String> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    let mut fields = BTreeMap::new();
    fields.insert("sm_number".to_string(), case.sm_number.clone());
    fields.insert("name".to_string(), case.full_name());
    fields.insert("first_name".to_string(), case.first_name.clone());
    fields.insert("middle_name".to_string(), text(&case.middle_name));
    fields.insert("last_name".to_string(), case.last_name.clone());
    fields.insert("sex".to_string(), text(&case.sex));
    fields.insert(
        "date_of_birth".to_string(),
        case.date_of_birth
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_default(),
    );
    fields.insert("address".to_string(), text(&case.address));
    fields.insert("problem_presented".to_string(), text(&case.problem_presented));
    fields.insert(
        "observation_findings".to_string(),
        text(&case.observation_findings),
    );
    fields.insert(
        "caseworker".to_string(),
        caseworker.map(|c| c.name.clone()).unwrap_or_default(),
    );
    fields.insert(
        "spu".to_string(),
        spu.map(|s| s.name.clone()).unwrap_or_default(),
    );
    fields.insert(
        "status".to_string(),
        if case.is_active { "Active" } else { "Closed" }.to_string(),
    );
    fields.insert(
        "generated_on".to_string(),
        generated_at.format("%B %-d, %Y").to_string(),
    );
    fields
}
