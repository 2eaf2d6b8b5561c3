use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Intervention form database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "interventions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub case_id: Uuid,

    /// correspondence / counseling / financial / home_visit
    pub kind: String,

    /// 1-based, per case and kind
    pub intervention_number: i32,

    /// Kind-specific form fields
    pub details: Json,

    pub created_by: Uuid,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain model; rows with an unknown kind are skipped
    pub fn to_domain_intervention(&self) -> Option<crate::core::models::Intervention> {
        use crate::core::models::{Intervention, InterventionKind};

        let kind = match InterventionKind::from_str(&self.kind) {
            Ok(kind) => kind,
            Err(_) => {
                warn!(
                    "Intervention {} has unknown kind '{}', ignoring",
                    self.id, self.kind
                );
                return None;
            }
        };

        Some(Intervention {
            id: self.id,
            case: self.case_id,
            kind,
            intervention_number: self.intervention_number,
            details: self.details.clone(),
            created_by: self.created_by,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        })
    }

    pub fn from_domain_intervention(
        intervention: &crate::core::models::Intervention,
    ) -> ActiveModel {
        ActiveModel {
            id: Set(intervention.id),
            case_id: Set(intervention.case),
            kind: Set(intervention.kind.as_str().to_string()),
            intervention_number: Set(intervention.intervention_number),
            details: Set(intervention.details.clone()),
            created_by: Set(intervention.created_by),
            created_at: Set(intervention.created_at.into()),
            updated_at: Set(intervention.updated_at.into()),
        }
    }
}
