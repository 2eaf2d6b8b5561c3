//! Intervention forms

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of intervention recorded against a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionKind {
    Correspondence,
    Counseling,
    Financial,
    HomeVisit,
}

impl InterventionKind {
    pub const ALL: [InterventionKind; 4] = [
        InterventionKind::Correspondence,
        InterventionKind::Counseling,
        InterventionKind::Financial,
        InterventionKind::HomeVisit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterventionKind::Correspondence => "correspondence",
            InterventionKind::Counseling => "counseling",
            InterventionKind::Financial => "financial",
            InterventionKind::HomeVisit => "home_visit",
        }
    }
}

impl fmt::Display for InterventionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterventionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "correspondence" => Ok(InterventionKind::Correspondence),
            "counseling" => Ok(InterventionKind::Counseling),
            "financial" | "financial_assistance" => Ok(InterventionKind::Financial),
            "home_visit" | "home_visitation" => Ok(InterventionKind::HomeVisit),
            _ => Err(format!("Invalid intervention kind: {}", s)),
        }
    }
}

/// One intervention form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: Uuid,
    pub case: Uuid,
    pub kind: InterventionKind,
    /// 1-based sequence within the case and kind
    pub intervention_number: i32,
    /// Kind-specific form fields
    pub details: serde_json::Value,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new intervention; the number is assigned on insert
#[derive(Debug, Clone, Deserialize)]
pub struct NewIntervention {
    pub kind: InterventionKind,
    #[serde(default = "empty_details")]
    pub details: serde_json::Value,
}

/// Replacement form fields for an existing intervention
#[derive(Debug, Clone, Deserialize)]
pub struct InterventionUpdate {
    pub details: serde_json::Value,
}

fn empty_details() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
