//! Interventions and progress reports.
//!
//! Every write re-reads the owning case inside the transaction and bumps its
//! version, so a form can never land on a case that was closed meanwhile.

use crate::core::models::{
    Intervention, InterventionKind, NewProgressReport, ProgressReport, ProgressReportUpdate,
};
use crate::utils::error::{CaseworkError, Result};
use chrono::Utc;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, intervention, progress_report};
use super::case_ops::{commit_case, load_open_case};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    /// List interventions of a case, optionally of one kind
    pub async fn list_interventions(
        &self,
        case_id: Uuid,
        kind: Option<InterventionKind>,
    ) -> Result<Vec<Intervention>> {
        debug!("Listing interventions for case: {}", case_id);

        let mut query =
            entities::Intervention::find().filter(intervention::Column::CaseId.eq(case_id));
        if let Some(kind) = kind {
            query = query.filter(intervention::Column::Kind.eq(kind.as_str()));
        }

        let models = query
            .order_by_asc(intervention::Column::Kind)
            .order_by_asc(intervention::Column::InterventionNumber)
            .all(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(models
            .iter()
            .filter_map(|m| m.to_domain_intervention())
            .collect())
    }

    /// Find an intervention belonging to `case_id`
    pub async fn find_intervention(
        &self,
        case_id: Uuid,
        intervention_id: Uuid,
    ) -> Result<Option<Intervention>> {
        let model = entities::Intervention::find_by_id(intervention_id)
            .filter(intervention::Column::CaseId.eq(case_id))
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.and_then(|m| m.to_domain_intervention()))
    }

    /// Record a new intervention, numbering it after the last one of its kind
    pub async fn create_intervention(
        &self,
        case_id: Uuid,
        kind: InterventionKind,
        details: serde_json::Value,
        created_by: Uuid,
    ) -> Result<Intervention> {
        debug!("Creating {} intervention for case: {}", kind, case_id);

        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;
        let case = load_open_case(&txn, case_id, None).await?;

        let last = entities::Intervention::find()
            .filter(intervention::Column::CaseId.eq(case_id))
            .filter(intervention::Column::Kind.eq(kind.as_str()))
            .order_by_desc(intervention::Column::InterventionNumber)
            .one(&txn)
            .await?;

        let now = Utc::now();
        let record = Intervention {
            id: Uuid::new_v4(),
            case: case_id,
            kind,
            intervention_number: last.map(|m| m.intervention_number + 1).unwrap_or(1),
            details,
            created_by,
            created_at: now,
            updated_at: now,
        };

        entities::Intervention::insert(intervention::Model::from_domain_intervention(&record))
            .exec(&txn)
            .await
            .map_err(|e| write_error(e, "intervention number"))?;

        commit_case(&txn, case).await?;
        txn.commit().await.map_err(CaseworkError::Database)?;

        Ok(record)
    }

    /// Replace the form fields of an intervention
    pub async fn update_intervention(
        &self,
        case_id: Uuid,
        intervention_id: Uuid,
        details: serde_json::Value,
    ) -> Result<Intervention> {
        debug!("Updating intervention: {}", intervention_id);

        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;
        let case = load_open_case(&txn, case_id, None).await?;

        let mut model: intervention::ActiveModel = entities::Intervention::find_by_id(intervention_id)
            .filter(intervention::Column::CaseId.eq(case_id))
            .one(&txn)
            .await?
            .ok_or_else(|| CaseworkError::not_found("intervention not found"))?
            .into();

        model.details = Set(details);
        model.updated_at = Set(Utc::now().into());
        let updated = model.update(&txn).await?;

        commit_case(&txn, case).await?;
        txn.commit().await.map_err(CaseworkError::Database)?;

        updated
            .to_domain_intervention()
            .ok_or_else(|| CaseworkError::internal("stored intervention has an unknown kind"))
    }

    /// List progress reports of a case in order
    pub async fn list_progress_reports(&self, case_id: Uuid) -> Result<Vec<ProgressReport>> {
        debug!("Listing progress reports for case: {}", case_id);

        let models = entities::ProgressReport::find()
            .filter(progress_report::Column::CaseId.eq(case_id))
            .order_by_asc(progress_report::Column::ReportNumber)
            .all(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_report()).collect())
    }

    /// Find a progress report belonging to `case_id`
    pub async fn find_progress_report(
        &self,
        case_id: Uuid,
        report_id: Uuid,
    ) -> Result<Option<ProgressReport>> {
        let model = entities::ProgressReport::find_by_id(report_id)
            .filter(progress_report::Column::CaseId.eq(case_id))
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.map(|m| m.to_domain_report()))
    }

    pub async fn create_progress_report(
        &self,
        case_id: Uuid,
        input: &NewProgressReport,
        created_by: Uuid,
    ) -> Result<ProgressReport> {
        debug!("Creating progress report for case: {}", case_id);

        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;
        let case = load_open_case(&txn, case_id, None).await?;

        let last = entities::ProgressReport::find()
            .filter(progress_report::Column::CaseId.eq(case_id))
            .order_by_desc(progress_report::Column::ReportNumber)
            .one(&txn)
            .await?;

        let now = Utc::now();
        let report = ProgressReport {
            id: Uuid::new_v4(),
            case: case_id,
            report_number: last.map(|m| m.report_number + 1).unwrap_or(1),
            period_start: input.period_start,
            period_end: input.period_end,
            summary: input.summary.clone(),
            recommendation: input.recommendation.clone(),
            created_by,
            created_at: now,
            updated_at: now,
        };

        entities::ProgressReport::insert(progress_report::Model::from_domain_report(&report))
            .exec(&txn)
            .await
            .map_err(|e| write_error(e, "progress report number"))?;

        commit_case(&txn, case).await?;
        txn.commit().await.map_err(CaseworkError::Database)?;

        Ok(report)
    }

    /// Apply a partial update to a progress report.
    ///
    /// `validate` sees the merged report before anything is written.
    pub async fn update_progress_report<F>(
        &self,
        case_id: Uuid,
        report_id: Uuid,
        update: &ProgressReportUpdate,
        validate: F,
    ) -> Result<ProgressReport>
    where
        F: FnOnce(&ProgressReport) -> Result<()>,
    {
        debug!("Updating progress report: {}", report_id);

        let txn = self.db.begin().await.map_err(CaseworkError::Database)?;
        let case = load_open_case(&txn, case_id, None).await?;

        let mut report = entities::ProgressReport::find_by_id(report_id)
            .filter(progress_report::Column::CaseId.eq(case_id))
            .one(&txn)
            .await?
            .ok_or_else(|| CaseworkError::not_found("progress report not found"))?
            .to_domain_report();

        update.apply_to(&mut report);
        validate(&report)?;
        report.updated_at = Utc::now();

        progress_report::Model::from_domain_report(&report)
            .update(&txn)
            .await?;

        commit_case(&txn, case).await?;
        txn.commit().await.map_err(CaseworkError::Database)?;

        Ok(report)
    }
}
