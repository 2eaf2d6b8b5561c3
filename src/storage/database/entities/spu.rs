use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sub-project unit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "spus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Unit name (unique)
    #[sea_orm(unique)]
    pub name: String,

    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_spu(&self) -> crate::core::models::Spu {
        crate::core::models::Spu {
            id: self.id,
            name: self.name.clone(),
            is_active: self.is_active,
            created_at: self.created_at.naive_utc().and_utc(),
        }
    }

    pub fn from_domain_spu(spu: &crate::core::models::Spu) -> ActiveModel {
        ActiveModel {
            id: Set(spu.id),
            name: Set(spu.name.clone()),
            is_active: Set(spu.is_active),
            created_at: Set(spu.created_at.into()),
        }
    }
}
