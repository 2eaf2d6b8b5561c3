use crate::core::models::{CaseScope, ClosureStatus, InterventionKind};
use crate::utils::error::{CaseworkError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, case_closure, intervention, progress_report, sponsored_member};
use super::case_ops::case_ids_in_scope;
use super::types::{CaseStatistics, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Aggregate counts over the cases inside `scope`
    pub async fn case_statistics(&self, scope: &CaseScope) -> Result<CaseStatistics> {
        debug!("Computing case statistics for scope: {:?}", scope);

        let mut stats = CaseStatistics::default();
        for kind in InterventionKind::ALL {
            stats.interventions_by_kind.insert(kind.as_str().to_string(), 0);
        }

        let case_ids = case_ids_in_scope(&self.db, scope).await?;
        if case_ids.as_ref().is_some_and(|ids| ids.is_empty()) {
            return Ok(stats);
        }

        let mut cases = entities::SponsoredMember::find()
            .select_only()
            .column(sponsored_member::Column::IsActive)
            .column(sponsored_member::Column::SpuId);
        if let Some(ids) = &case_ids {
            cases = cases.filter(sponsored_member::Column::Id.is_in(ids.clone()));
        }
        let rows: Vec<(bool, Option<Uuid>)> = cases
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        for (is_active, spu) in rows {
            if is_active {
                stats.active_cases += 1;
                *stats.cases_per_spu.entry(spu).or_default() += 1;
            } else {
                stats.closed_cases += 1;
            }
        }

        for kind in InterventionKind::ALL {
            let mut query = entities::Intervention::find()
                .filter(intervention::Column::Kind.eq(kind.as_str()));
            if let Some(ids) = &case_ids {
                query = query.filter(intervention::Column::CaseId.is_in(ids.clone()));
            }
            let count = query
                .count(&self.db)
                .await
                .map_err(CaseworkError::Database)?;
            stats
                .interventions_by_kind
                .insert(kind.as_str().to_string(), count);
        }

        let mut reports = entities::ProgressReport::find();
        if let Some(ids) = &case_ids {
            reports = reports.filter(progress_report::Column::CaseId.is_in(ids.clone()));
        }
        stats.progress_reports = reports
            .count(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        let mut closures = entities::CaseClosure::find()
            .filter(case_closure::Column::Status.eq(ClosureStatus::Pending.as_str()));
        if let Some(ids) = &case_ids {
            closures = closures.filter(case_closure::Column::CaseId.is_in(ids.clone()));
        }
        stats.pending_closures = closures
            .count(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(stats)
    }
}
