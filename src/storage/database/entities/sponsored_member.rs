use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sponsored member (case) database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sponsored_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Case number (unique)
    #[sea_orm(unique)]
    pub sm_number: String,

    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub sex: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub problem_presented: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub observation_findings: Option<String>,

    /// Handling employee
    pub assigned_caseworker_id: Uuid,

    pub spu_id: Option<Uuid>,

    /// False once a closure request has been accepted
    pub is_active: bool,

    /// Version for optimistic locking
    pub version: i32,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain case model
    pub fn to_domain_case(&self) -> crate::core::models::SponsoredMember {
        crate::core::models::SponsoredMember {
            id: self.id,
            sm_number: self.sm_number.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            sex: self.sex.clone(),
            date_of_birth: self.date_of_birth,
            address: self.address.clone(),
            problem_presented: self.problem_presented.clone(),
            observation_findings: self.observation_findings.clone(),
            assigned_caseworker: self.assigned_caseworker_id,
            spu: self.spu_id,
            is_active: self.is_active,
            version: self.version,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain case model to SeaORM active model
    pub fn from_domain_case(case: &crate::core::models::SponsoredMember) -> ActiveModel {
        ActiveModel {
            id: Set(case.id),
            sm_number: Set(case.sm_number.clone()),
            first_name: Set(case.first_name.clone()),
            middle_name: Set(case.middle_name.clone()),
            last_name: Set(case.last_name.clone()),
            sex: Set(case.sex.clone()),
            date_of_birth: Set(case.date_of_birth),
            address: Set(case.address.clone()),
            problem_presented: Set(case.problem_presented.clone()),
            observation_findings: Set(case.observation_findings.clone()),
            assigned_caseworker_id: Set(case.assigned_caseworker),
            spu_id: Set(case.spu),
            is_active: Set(case.is_active),
            version: Set(case.version),
            created_at: Set(case.created_at.into()),
            updated_at: Set(case.updated_at.into()),
        }
    }
}
