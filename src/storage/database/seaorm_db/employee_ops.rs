use crate::core::models::{Employee, Role};
use crate::utils::error::{CaseworkError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, employee};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    /// Find employee by ID
    pub async fn find_employee_by_id(&self, employee_id: Uuid) -> Result<Option<Employee>> {
        debug!("Finding employee by ID: {}", employee_id);

        let model = entities::Employee::find_by_id(employee_id)
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.map(|model| model.to_domain_employee()))
    }

    /// Find employee by username
    pub async fn find_employee_by_username(&self, username: &str) -> Result<Option<Employee>> {
        debug!("Finding employee by username: {}", username);

        let model = entities::Employee::find()
            .filter(employee::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.map(|model| model.to_domain_employee()))
    }

    /// List every employee, ordered by name
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let models = entities::Employee::find()
            .order_by_asc(employee::Column::LastName)
            .order_by_asc(employee::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_employee()).collect())
    }

    /// List the direct reports of `manager_id`, optionally restricted to one role
    pub async fn list_employees_managed_by(
        &self,
        manager_id: Uuid,
        role: Option<&Role>,
    ) -> Result<Vec<Employee>> {
        debug!("Listing employees managed by: {}", manager_id);

        let mut query =
            entities::Employee::find().filter(employee::Column::ManagerId.eq(manager_id));
        if let Some(role) = role {
            query = query.filter(employee::Column::Role.eq(role.as_str()));
        }

        let models = query
            .order_by_asc(employee::Column::LastName)
            .order_by_asc(employee::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_employee()).collect())
    }

    /// Create a new employee
    pub async fn create_employee(&self, employee: &Employee) -> Result<Employee> {
        debug!("Creating employee: {}", employee.username);

        let active_model = employee::Model::from_domain_employee(employee);
        entities::Employee::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, "username"))?;

        Ok(employee.clone())
    }

    /// Activate or deactivate an employee
    pub async fn set_employee_active(&self, employee_id: Uuid, active: bool) -> Result<Employee> {
        debug!("Setting employee {} active={}", employee_id, active);

        let mut model: employee::ActiveModel = entities::Employee::find_by_id(employee_id)
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?
            .ok_or_else(|| CaseworkError::not_found("employee not found"))?
            .into();

        model.is_active = Set(active);
        model.updated_at = Set(chrono::Utc::now().into());

        let updated = model
            .update(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(updated.to_domain_employee())
    }

    /// Total number of employee records
    pub async fn count_employees(&self) -> Result<u64> {
        entities::Employee::find()
            .count(&self.db)
            .await
            .map_err(CaseworkError::Database)
    }
}
