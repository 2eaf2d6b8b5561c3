use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Employee ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Login name (unique)
    #[sea_orm(unique)]
    pub username: String,

    pub first_name: String,

    pub last_name: String,

    pub email: Option<String>,

    /// Argon2 password hash
    pub password_hash: String,

    /// Stored as free text; unknown values survive as unrecognized roles
    pub role: String,

    /// Direct superior
    pub manager_id: Option<Uuid>,

    pub spu_id: Option<Uuid>,

    pub is_active: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain employee model
    pub fn to_domain_employee(&self) -> crate::core::models::Employee {
        use crate::core::models::{Employee, Role};

        Employee {
            id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            role: Role::from(self.role.as_str()),
            manager: self.manager_id,
            spu: self.spu_id,
            is_active: self.is_active,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain employee model to SeaORM active model
    pub fn from_domain_employee(employee: &crate::core::models::Employee) -> ActiveModel {
        ActiveModel {
            id: Set(employee.id),
            username: Set(employee.username.clone()),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            email: Set(employee.email.clone()),
            password_hash: Set(employee.password_hash.clone()),
            role: Set(employee.role.to_string()),
            manager_id: Set(employee.manager),
            spu_id: Set(employee.spu),
            is_active: Set(employee.is_active),
            created_at: Set(employee.created_at.into()),
            updated_at: Set(employee.updated_at.into()),
        }
    }
}
