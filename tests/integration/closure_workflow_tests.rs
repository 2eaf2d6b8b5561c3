//! Closure workflow and optimistic versioning

#[cfg(test)]
mod tests {
    use crate::common::{CaseFactory, TestDatabase};
    use crate::{assert_err, assert_ok};
    use casework::core::models::{
        ClosureStatus, InterventionKind, NewIntervention, NewProgressReport,
        ProgressReportUpdate, SponsoredMemberUpdate,
    };
    use casework::services::{ClosureRequest, ReassignRequest};
    use casework::CaseworkError;
    use chrono::NaiveDate;
    use serde_json::json;

    fn reason(text: &str) -> ClosureRequest {
        ClosureRequest {
            reason: text.to_string(),
        }
    }

    fn visit() -> NewIntervention {
        NewIntervention {
            kind: InterventionKind::HomeVisit,
            details: json!({"findings": "household stable"}),
        }
    }

    #[tokio::test]
    async fn test_accepted_closure_freezes_case() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let service = db.service();
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;

        let report = assert_ok!(
            service
                .create_progress_report(
                    Some(&org.sdw),
                    case.id,
                    NewProgressReport {
                        period_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                        period_end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
                        summary: "Attending school regularly".to_string(),
                        recommendation: None,
                    },
                )
                .await
        );

        let closure = assert_ok!(
            service
                .request_closure(Some(&org.sdw), case.id, reason("Reached age limit"))
                .await
        );
        let (closure, closed) = assert_ok!(service.accept_closure(Some(&org.head), closure.id).await);
        assert_eq!(closure.status, ClosureStatus::Accepted);
        assert!(!closed.is_active);

        // Reads still work
        assert_ok!(service.get_case(Some(&org.supervisor), case.id).await);
        assert_ok!(
            service
                .list_progress_reports(Some(&org.sdw), case.id)
                .await
        );

        // Every kind of write is refused with a conflict
        let err = assert_err!(service.create_intervention(Some(&org.sdw), case.id, visit()).await);
        assert!(matches!(err, CaseworkError::Conflict(_)));

        let err = assert_err!(
            service
                .update_progress_report(
                    Some(&org.sdw),
                    case.id,
                    report.id,
                    ProgressReportUpdate {
                        summary: Some("Late edit".to_string()),
                        ..Default::default()
                    },
                )
                .await
        );
        assert!(matches!(err, CaseworkError::Conflict(_)));

        let err = assert_err!(
            service
                .update_case(
                    Some(&org.head),
                    case.id,
                    SponsoredMemberUpdate {
                        address: Some("Moved".to_string()),
                        ..Default::default()
                    },
                )
                .await
        );
        assert!(matches!(err, CaseworkError::Conflict(_)));

        let err = assert_err!(
            service
                .reassign_case(
                    Some(&org.head),
                    case.id,
                    ReassignRequest {
                        caseworker: org.peer_sdw.id,
                        version: None,
                    },
                )
                .await
        );
        assert!(matches!(err, CaseworkError::Conflict(_)));

        // Resolved requests cannot be resolved again
        let err = assert_err!(service.accept_closure(Some(&org.head), closure.id).await);
        assert!(matches!(err, CaseworkError::Conflict(_)));
        let err = assert_err!(service.reject_closure(Some(&org.head), closure.id).await);
        assert!(matches!(err, CaseworkError::Conflict(_)));

        // Nor can a closed case be asked to close again
        let err = assert_err!(
            service
                .request_closure(Some(&org.sdw), case.id, reason("Again"))
                .await
        );
        assert!(matches!(err, CaseworkError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_closure_request_needs_a_reason() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let service = db.service();
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;

        let err = assert_err!(
            service
                .request_closure(Some(&org.sdw), case.id, reason("   "))
                .await
        );
        assert!(matches!(err, CaseworkError::Validation(_)));
        assert!(db.db().find_closure_by_case(case.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sdw_cannot_resolve_own_request() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let service = db.service();
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;

        let closure = assert_ok!(
            service
                .request_closure(Some(&org.sdw), case.id, reason("Family moved away"))
                .await
        );
        let err = assert_err!(service.accept_closure(Some(&org.sdw), closure.id).await);
        assert!(matches!(err, CaseworkError::AccessDenied(_)));
        let err = assert_err!(service.accept_closure(None, closure.id).await);
        assert!(matches!(err, CaseworkError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_pending_list_is_scoped() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let service = db.service();

        for sdw in [&org.sdw, &org.peer_sdw, &org.other_sdw] {
            let case = CaseFactory::assigned_to(sdw).insert(db.db()).await;
            assert_ok!(
                service
                    .request_closure(Some(sdw), case.id, reason("Graduated"))
                    .await
            );
        }

        let pending = Some(ClosureStatus::Pending);
        assert_eq!(service.list_closures(Some(&org.head), pending).await.unwrap().len(), 3);
        assert_eq!(
            service
                .list_closures(Some(&org.supervisor), pending)
                .await
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            service
                .list_closures(Some(&org.other_supervisor), pending)
                .await
                .unwrap()
                .len(),
            1
        );
        assert_eq!(service.list_closures(Some(&org.sdw), pending).await.unwrap().len(), 1);
        assert!(
            service
                .list_closures(Some(&org.head), Some(ClosureStatus::Accepted))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_version_moves_with_every_write() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let service = db.service();
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;
        assert_eq!(case.version, 0);

        let intervention = assert_ok!(service.create_intervention(Some(&org.sdw), case.id, visit()).await);
        assert_ok!(
            service
                .update_intervention(
                    Some(&org.supervisor),
                    case.id,
                    intervention.id,
                    casework::core::models::InterventionUpdate {
                        details: json!({"findings": "follow-up needed"}),
                    },
                )
                .await
        );

        let current = db.db().find_case_by_id(case.id).await.unwrap().unwrap();
        assert_eq!(current.version, 2);

        // A client still holding version 0 is told to reload
        let err = assert_err!(
            service
                .update_case(
                    Some(&org.sdw),
                    case.id,
                    SponsoredMemberUpdate {
                        observation_findings: Some("Needs glasses".to_string()),
                        version: Some(0),
                        ..Default::default()
                    },
                )
                .await
        );
        assert!(matches!(err, CaseworkError::Conflict(_)));

        let err = assert_err!(
            service
                .reassign_case(
                    Some(&org.supervisor),
                    case.id,
                    ReassignRequest {
                        caseworker: org.peer_sdw.id,
                        version: Some(1),
                    },
                )
                .await
        );
        assert!(matches!(err, CaseworkError::Conflict(_)));

        let moved = assert_ok!(
            service
                .reassign_case(
                    Some(&org.supervisor),
                    case.id,
                    ReassignRequest {
                        caseworker: org.peer_sdw.id,
                        version: Some(2),
                    },
                )
                .await
        );
        assert_eq!(moved.version, 3);
    }

    #[tokio::test]
    async fn test_concurrent_acceptance_and_form_write_never_write_to_closed_case() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let service = db.service();
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;
        let closure = assert_ok!(
            service
                .request_closure(Some(&org.sdw), case.id, reason("Sponsorship ended"))
                .await
        );

        let (accepted, written) = tokio::join!(
            service.accept_closure(Some(&org.supervisor), closure.id),
            service.create_intervention(Some(&org.sdw), case.id, visit()),
        );

        let (_, closed) = assert_ok!(accepted);
        assert!(!closed.is_active);

        let interventions = db.db().list_interventions(case.id, None).await.unwrap();
        match written {
            // The form landed first; acceptance then bumped past it
            Ok(intervention) => {
                assert_eq!(interventions.len(), 1);
                assert_eq!(interventions[0].id, intervention.id);
                assert_eq!(closed.version, 2);
            }
            Err(err) => {
                assert!(matches!(err, CaseworkError::Conflict(_)));
                assert!(interventions.is_empty());
                assert_eq!(closed.version, 1);
            }
        }
    }
}
