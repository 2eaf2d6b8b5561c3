//! Case closure requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Status of a closure request. Rejected requests are deleted, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClosureStatus {
    Pending,
    Accepted,
}

impl ClosureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClosureStatus::Pending => "Pending",
            ClosureStatus::Accepted => "Accepted",
        }
    }
}

impl fmt::Display for ClosureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClosureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ClosureStatus::Pending),
            "Accepted" => Ok(ClosureStatus::Accepted),
            _ => Err(format!("Invalid closure status: {}", s)),
        }
    }
}

/// A request to close a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClosure {
    pub id: Uuid,
    pub case: Uuid,
    pub status: ClosureStatus,
    pub reason: String,
    pub requested_by: Uuid,
    pub resolved_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CaseClosure {
    pub fn is_pending(&self) -> bool {
        self.status == ClosureStatus::Pending
    }
}
