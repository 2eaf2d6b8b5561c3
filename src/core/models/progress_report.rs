//! Progress reports

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Periodic progress report for a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub id: Uuid,
    pub case: Uuid,
    /// 1-based sequence within the case
    pub report_number: i32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub summary: String,
    pub recommendation: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new progress report; the number is assigned on insert
#[derive(Debug, Clone, Deserialize)]
pub struct NewProgressReport {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub summary: String,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Partial update of a progress report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressReportUpdate {
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl ProgressReportUpdate {
    pub fn apply_to(&self, report: &mut ProgressReport) {
        if let Some(v) = self.period_start {
            report.period_start = v;
        }
        if let Some(v) = self.period_end {
            report.period_end = v;
        }
        if let Some(v) = &self.summary {
            report.summary = v.trim().to_string();
        }
        if let Some(v) = &self.recommendation {
            report.recommendation = Some(v.clone());
        }
    }
}
