use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Progress report database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "progress_reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub case_id: Uuid,

    /// 1-based, per case
    pub report_number: i32,

    pub period_start: Date,
    pub period_end: Date,

    #[sea_orm(column_type = "Text")]
    pub summary: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub recommendation: Option<String>,

    pub created_by: Uuid,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_report(&self) -> crate::core::models::ProgressReport {
        crate::core::models::ProgressReport {
            id: self.id,
            case: self.case_id,
            report_number: self.report_number,
            period_start: self.period_start,
            period_end: self.period_end,
            summary: self.summary.clone(),
            recommendation: self.recommendation.clone(),
            created_by: self.created_by,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    pub fn from_domain_report(report: &crate::core::models::ProgressReport) -> ActiveModel {
        ActiveModel {
            id: Set(report.id),
            case_id: Set(report.case),
            report_number: Set(report.report_number),
            period_start: Set(report.period_start),
            period_end: Set(report.period_end),
            summary: Set(report.summary.clone()),
            recommendation: Set(report.recommendation.clone()),
            created_by: Set(report.created_by),
            created_at: Set(report.created_at.into()),
            updated_at: Set(report.updated_at.into()),
        }
    }
}
