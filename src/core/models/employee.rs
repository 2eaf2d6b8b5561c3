//! Employee model and organizational roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Organizational role of an employee.
///
/// Stored as a string. Values outside the known set are preserved as
/// `Unrecognized` so that authorization can fail closed on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Top of the hierarchy, unrestricted case access
    Head,
    /// Manages a set of sdws, reports to a head
    Supervisor,
    /// Social Development Worker, front-line caseworker
    Sdw,
    /// Any stored value that is not one of the above
    Unrecognized(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Head => "head",
            Role::Supervisor => "supervisor",
            Role::Sdw => "sdw",
            Role::Unrecognized(other) => other.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unrecognized(_))
    }

    /// Role an employee's direct manager must hold, if any
    pub fn expected_manager_role(&self) -> Option<Role> {
        match self {
            Role::Sdw => Some(Role::Supervisor),
            Role::Supervisor => Some(Role::Head),
            Role::Head | Role::Unrecognized(_) => None,
        }
    }
}

/// Exact match only; `"HEAD"` or `" head"` stay unrecognized.
impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "head" => Role::Head,
            "supervisor" => Role::Supervisor,
            "sdw" => Role::Sdw,
            _ => Role::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    /// Argon2 hash, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    /// Direct manager; `None` for heads
    pub manager: Option<Uuid>,
    /// Sub-project unit the employee belongs to
    pub spu: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_head(&self) -> bool {
        self.role == Role::Head
    }

    pub fn is_supervisor(&self) -> bool {
        self.role == Role::Supervisor
    }

    pub fn is_sdw(&self) -> bool {
        self.role == Role::Sdw
    }

    /// Whether `other` reports directly to this employee
    pub fn manages(&self, other: &Employee) -> bool {
        other.manager == Some(self.id)
    }
}

/// Input for creating an employee
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub manager: Option<Uuid>,
    #[serde(default)]
    pub spu: Option<Uuid>,
}
