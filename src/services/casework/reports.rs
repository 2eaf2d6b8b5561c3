use super::CaseworkService;
use crate::auth::access::AccessIntent;
use crate::core::models::{Employee, NewProgressReport, ProgressReport, ProgressReportUpdate};
use crate::utils::error::{CaseworkError, Result};
use crate::utils::required_text;
use chrono::NaiveDate;
use uuid::Uuid;

impl CaseworkService {
    pub async fn list_progress_reports(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
    ) -> Result<Vec<ProgressReport>> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Read)
            .await?;
        self.db().list_progress_reports(case_id).await
    }

    pub async fn get_progress_report(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        report_id: Uuid,
    ) -> Result<ProgressReport> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Read)
            .await?;
        self.db()
            .find_progress_report(case_id, report_id)
            .await?
            .ok_or_else(|| CaseworkError::not_found("progress report not found"))
    }

    pub async fn create_progress_report(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        mut input: NewProgressReport,
    ) -> Result<ProgressReport> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Mutate)
            .await?;
        let author = super::require_requester(requester)?;

        input.summary = required_text("summary", &input.summary)?;
        check_period(input.period_start, input.period_end)?;

        self.db()
            .create_progress_report(case_id, &input, author.id)
            .await
    }

    pub async fn update_progress_report(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        report_id: Uuid,
        update: ProgressReportUpdate,
    ) -> Result<ProgressReport> {
        self.guard()
            .authorize(requester, case_id, AccessIntent::Mutate)
            .await?;

        self.db()
            .update_progress_report(case_id, report_id, &update, |merged| {
                required_text("summary", &merged.summary)?;
                check_period(merged.period_start, merged.period_end)
            })
            .await
    }
}

fn check_period(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(CaseworkError::validation(
            "period_start must not be after period_end",
        ));
    }
    Ok(())
}
