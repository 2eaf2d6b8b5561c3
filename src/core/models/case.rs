//! Sponsored member (case) model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sponsored member's case file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsoredMember {
    pub id: Uuid,
    /// Organization-issued member number, unique
    pub sm_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub sex: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub problem_presented: Option<String>,
    pub observation_findings: Option<String>,
    /// Employee currently handling the case
    pub assigned_caseworker: Uuid,
    pub spu: Option<Uuid>,
    /// False once the case closure has been accepted
    pub is_active: bool,
    /// Bumped on every mutation of the case or its forms
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SponsoredMember {
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Input for registering a new case
#[derive(Debug, Clone, Deserialize)]
pub struct NewSponsoredMember {
    pub sm_number: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub problem_presented: Option<String>,
    #[serde(default)]
    pub observation_findings: Option<String>,
    pub assigned_caseworker: Uuid,
    #[serde(default)]
    pub spu: Option<Uuid>,
}

/// Partial update of a case profile. `version`, when given, must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SponsoredMemberUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub problem_presented: Option<String>,
    #[serde(default)]
    pub observation_findings: Option<String>,
    #[serde(default)]
    pub spu: Option<Uuid>,
    #[serde(default)]
    pub version: Option<i32>,
}

impl SponsoredMemberUpdate {
    /// Apply the present fields onto `case`
    pub fn apply_to(&self, case: &mut SponsoredMember) {
        if let Some(v) = &self.first_name {
            case.first_name = v.trim().to_string();
        }
        if let Some(v) = &self.middle_name {
            case.middle_name = Some(v.clone());
        }
        if let Some(v) = &self.last_name {
            case.last_name = v.trim().to_string();
        }
        if let Some(v) = &self.sex {
            case.sex = Some(v.clone());
        }
        if let Some(v) = self.date_of_birth {
            case.date_of_birth = Some(v);
        }
        if let Some(v) = &self.address {
            case.address = Some(v.clone());
        }
        if let Some(v) = &self.problem_presented {
            case.problem_presented = Some(v.clone());
        }
        if let Some(v) = &self.observation_findings {
            case.observation_findings = Some(v.clone());
        }
        if let Some(v) = self.spu {
            case.spu = Some(v);
        }
    }
}

/// The set of cases a listing may return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseScope {
    /// Every case in the system
    All,
    /// Cases assigned to one of these caseworkers
    HandledBy(Vec<Uuid>),
}

impl CaseScope {
    pub fn includes(&self, case: &SponsoredMember) -> bool {
        match self {
            CaseScope::All => true,
            CaseScope::HandledBy(ids) => ids.contains(&case.assigned_caseworker),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CaseScope::HandledBy(ids) if ids.is_empty())
    }
}
