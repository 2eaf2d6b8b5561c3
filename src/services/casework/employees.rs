use super::{CaseworkService, require_requester, require_role};
use crate::core::models::{Employee, NewEmployee, Role};
use crate::utils::auth::{hash_password, validate_password_strength};
use crate::utils::error::{CaseworkError, Result};
use crate::utils::{is_valid_email, required_text};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

/// First head account, created only on an empty database
#[derive(Debug, Clone)]
pub struct BootstrapHead {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl CaseworkService {
    /// Employees visible to the requester
    pub async fn list_employees(&self, requester: Option<&Employee>) -> Result<Vec<Employee>> {
        let requester = require_requester(requester)?;

        match &requester.role {
            Role::Head => self.db().list_employees().await,
            Role::Supervisor => {
                let mut employees = vec![requester.clone()];
                employees.extend(
                    self.db()
                        .list_employees_managed_by(requester.id, Some(&Role::Sdw))
                        .await?,
                );
                Ok(employees)
            }
            Role::Sdw => Ok(vec![requester.clone()]),
            Role::Unrecognized(_) => Err(CaseworkError::access_denied("invalid user role")),
        }
    }

    pub async fn get_employee(
        &self,
        requester: Option<&Employee>,
        employee_id: Uuid,
    ) -> Result<Employee> {
        let requester = require_requester(requester)?;

        let employee = self
            .db()
            .find_employee_by_id(employee_id)
            .await?
            .ok_or_else(|| CaseworkError::not_found("employee not found"))?;

        if !Self::can_view_employee(requester, &employee) {
            return Err(CaseworkError::access_denied(
                "employee not under your supervision",
            ));
        }
        Ok(employee)
    }

    /// Create an employee account, enforcing the reporting hierarchy
    pub async fn create_employee(
        &self,
        requester: Option<&Employee>,
        input: NewEmployee,
    ) -> Result<Employee> {
        let requester = require_requester(requester)?;
        require_role(requester, &[Role::Head], "create employees")?;

        let employee = self.build_employee(input).await?;
        let employee = self.db().create_employee(&employee).await?;

        info!(
            "Employee {} ({}) created by {}",
            employee.username, employee.role, requester.id
        );
        Ok(employee)
    }

    /// Deactivate an employee with no open cases
    pub async fn deactivate_employee(
        &self,
        requester: Option<&Employee>,
        employee_id: Uuid,
    ) -> Result<Employee> {
        let requester = require_requester(requester)?;
        require_role(requester, &[Role::Head], "deactivate employees")?;

        if requester.id == employee_id {
            return Err(CaseworkError::validation("you cannot deactivate yourself"));
        }

        if self
            .db()
            .find_employee_by_id(employee_id)
            .await?
            .is_none()
        {
            return Err(CaseworkError::not_found("employee not found"));
        }

        let open_cases = self.db().count_open_cases_handled_by(employee_id).await?;
        if open_cases > 0 {
            return Err(CaseworkError::conflict(format!(
                "employee still handles {} open case(s); reassign them first",
                open_cases
            )));
        }

        let employee = self.db().set_employee_active(employee_id, false).await?;
        info!("Employee {} deactivated by {}", employee.id, requester.id);
        Ok(employee)
    }

    /// Create the first head when no employee exists yet.
    ///
    /// Returns `None` when the database already has employees.
    pub async fn bootstrap_head(&self, seed: BootstrapHead) -> Result<Option<Employee>> {
        if self.db().count_employees().await? > 0 {
            return Ok(None);
        }

        warn!("No employees found, creating initial head account '{}'", seed.username);
        let employee = self
            .build_employee(NewEmployee {
                username: seed.username,
                password: seed.password,
                first_name: seed.first_name,
                last_name: seed.last_name,
                email: None,
                role: Role::Head,
                manager: None,
                spu: None,
            })
            .await?;

        Ok(Some(self.db().create_employee(&employee).await?))
    }

    async fn build_employee(&self, input: NewEmployee) -> Result<Employee> {
        let username = required_text("username", &input.username)?;
        let first_name = required_text("first_name", &input.first_name)?;
        let last_name = required_text("last_name", &input.last_name)?;
        validate_password_strength(&input.password)?;

        let email = match input.email.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(email) if is_valid_email(email) => Some(email.to_string()),
            Some(_) => return Err(CaseworkError::validation("email address is invalid")),
        };

        self.check_reporting_line(&input.role, input.manager).await?;
        if let Some(spu) = input.spu {
            self.require_spu(spu).await?;
        }

        if self
            .db()
            .find_employee_by_username(&username)
            .await?
            .is_some()
        {
            return Err(CaseworkError::conflict(format!(
                "username {} is already taken",
                username
            )));
        }

        let now = Utc::now();
        Ok(Employee {
            id: Uuid::new_v4(),
            username,
            first_name,
            last_name,
            email,
            password_hash: hash_password(&input.password)?,
            role: input.role,
            manager: input.manager,
            spu: input.spu,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// head has no manager, a supervisor reports to a head, an sdw to a supervisor
    async fn check_reporting_line(&self, role: &Role, manager: Option<Uuid>) -> Result<()> {
        if !role.is_recognized() {
            return Err(CaseworkError::validation(format!("invalid role: {}", role)));
        }

        match (role.expected_manager_role(), manager) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(CaseworkError::validation("a head cannot have a manager")),
            (Some(expected), None) => Err(CaseworkError::validation(format!(
                "a {} must report to a {}",
                role, expected
            ))),
            (Some(expected), Some(manager_id)) => {
                let manager = self
                    .db()
                    .find_employee_by_id(manager_id)
                    .await?
                    .ok_or_else(|| CaseworkError::validation("manager does not exist"))?;

                if !manager.is_active {
                    return Err(CaseworkError::validation("manager is deactivated"));
                }
                if manager.role != expected {
                    return Err(CaseworkError::validation(format!(
                        "a {} must report to a {}, not a {}",
                        role, expected, manager.role
                    )));
                }
                Ok(())
            }
        }
    }
}
