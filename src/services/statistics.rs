//! Dashboard statistics over the requester's visible cases

use crate::core::models::Employee;
use crate::services::casework::{CaseworkService, require_requester};
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Label used for cases without a unit
const UNASSIGNED_SPU: &str = "Unassigned";

/// Aggregates shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatistics {
    pub total_cases: u64,
    pub active_cases: u64,
    pub closed_cases: u64,
    pub interventions_by_kind: BTreeMap<String, u64>,
    pub progress_reports: u64,
    pub pending_closures: u64,
    pub cases_per_spu: Vec<SpuCaseCount>,
}

/// Active case count for one unit
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpuCaseCount {
    pub spu: Option<Uuid>,
    pub name: String,
    pub active_cases: u64,
}

impl CaseworkService {
    pub async fn dashboard_statistics(
        &self,
        requester: Option<&Employee>,
    ) -> Result<DashboardStatistics> {
        let requester = require_requester(requester)?;
        let scope = self.case_scope(requester).await?;
        let raw = self.db().case_statistics(&scope).await?;

        let names: HashMap<Uuid, String> = self
            .db()
            .list_spus()
            .await?
            .into_iter()
            .map(|spu| (spu.id, spu.name))
            .collect();

        let mut cases_per_spu: Vec<SpuCaseCount> = raw
            .cases_per_spu
            .iter()
            .map(|(spu, count)| SpuCaseCount {
                spu: *spu,
                name: spu
                    .and_then(|id| names.get(&id).cloned())
                    .unwrap_or_else(|| UNASSIGNED_SPU.to_string()),
                active_cases: *count,
            })
            .collect();
        cases_per_spu.sort_by(|a, b| {
            b.active_cases
                .cmp(&a.active_cases)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(DashboardStatistics {
            total_cases: raw.active_cases + raw.closed_cases,
            active_cases: raw.active_cases,
            closed_cases: raw.closed_cases,
            interventions_by_kind: raw.interventions_by_kind,
            progress_reports: raw.progress_reports,
            pending_closures: raw.pending_closures,
            cases_per_spu,
        })
    }
}
