use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Case closure request database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "case_closures")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// One request per case
    #[sea_orm(unique)]
    pub case_id: Uuid,

    /// Pending / Accepted
    pub status: String,

    #[sea_orm(column_type = "Text")]
    pub reason: String,

    pub requested_by: Uuid,

    pub resolved_by: Option<Uuid>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_closure(&self) -> crate::core::models::CaseClosure {
        use crate::core::models::{CaseClosure, ClosureStatus};

        CaseClosure {
            id: self.id,
            case: self.case_id,
            // Anything unreadable stays pending so it is never treated as final
            status: ClosureStatus::from_str(&self.status).unwrap_or(ClosureStatus::Pending),
            reason: self.reason.clone(),
            requested_by: self.requested_by,
            resolved_by: self.resolved_by,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    pub fn from_domain_closure(closure: &crate::core::models::CaseClosure) -> ActiveModel {
        ActiveModel {
            id: Set(closure.id),
            case_id: Set(closure.case),
            status: Set(closure.status.as_str().to_string()),
            reason: Set(closure.reason.clone()),
            requested_by: Set(closure.requested_by),
            resolved_by: Set(closure.resolved_by),
            created_at: Set(closure.created_at.into()),
            updated_at: Set(closure.updated_at.into()),
        }
    }
}
