//! Case access policy against stored records

#[cfg(test)]
mod tests {
    use crate::common::{CaseFactory, EmployeeFactory, TestDatabase};
    use casework::core::models::{Employee, Role};
    use casework::{AccessDecision, AccessIntent, CaseAccessGuard, CaseworkError, DenialReason};
    use uuid::Uuid;

    /// The chain-of-command rule, written out independently of the policy
    fn expected(requester: &Employee, handler: &Employee) -> bool {
        match requester.role {
            Role::Head => true,
            Role::Supervisor => match handler.role {
                Role::Sdw => handler.manager == Some(requester.id),
                Role::Supervisor => handler.id == requester.id,
                Role::Head => requester.manager == Some(handler.id),
                Role::Unrecognized(_) => false,
            },
            Role::Sdw => handler.id == requester.id,
            Role::Unrecognized(_) => false,
        }
    }

    #[tokio::test]
    async fn test_guard_matches_chain_of_command_for_every_pair() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let guard = CaseAccessGuard::new(db.db());

        for handler in org.everyone() {
            let case = CaseFactory::assigned_to(handler).insert(db.db()).await;

            for requester in org.everyone() {
                let outcome = guard.decide(Some(requester), case.id).await.unwrap();
                assert_eq!(
                    outcome.decision.is_authorized(),
                    expected(requester, handler),
                    "requester {} on case handled by {}",
                    requester.username,
                    handler.username
                );
            }
        }
    }

    #[tokio::test]
    async fn test_decisions_are_idempotent() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let guard = CaseAccessGuard::new(db.db());
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;

        for requester in org.everyone() {
            let first = guard.decide(Some(requester), case.id).await.unwrap();
            let second = guard.decide(Some(requester), case.id).await.unwrap();
            assert_eq!(first.decision, second.decision);
        }
    }

    #[tokio::test]
    async fn test_missing_requester_and_case() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let guard = CaseAccessGuard::new(db.db());
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;

        let outcome = guard.decide(None, case.id).await.unwrap();
        assert_eq!(
            outcome.decision,
            AccessDecision::Denied(DenialReason::AuthenticationRequired)
        );

        for requester in org.everyone() {
            let outcome = guard.decide(Some(requester), Uuid::new_v4()).await.unwrap();
            assert_eq!(
                outcome.decision,
                AccessDecision::Denied(DenialReason::CaseNotFound)
            );
        }

        let err = guard
            .authorize(Some(&org.head), Uuid::new_v4(), AccessIntent::Read)
            .await
            .unwrap_err();
        assert!(matches!(err, CaseworkError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unrecognized_requester_role_fails_closed() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let guard = CaseAccessGuard::new(db.db());
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;

        // Stored with a role outside the known set, even on its own case
        let admin = EmployeeFactory::new("admin", Role::from("admin"), None)
            .insert(db.db())
            .await;
        assert_eq!(admin.role, Role::Unrecognized("admin".to_string()));
        let own = CaseFactory::assigned_to(&admin).insert(db.db()).await;

        for case_id in [case.id, own.id] {
            let outcome = guard.decide(Some(&admin), case_id).await.unwrap();
            assert_eq!(
                outcome.decision,
                AccessDecision::Denied(DenialReason::InvalidUserRole)
            );
        }

        // Supervisors cannot reach a case handled by an unrecognized role
        let outcome = guard.decide(Some(&org.supervisor), own.id).await.unwrap();
        assert!(!outcome.decision.is_authorized());
        let outcome = guard.decide(Some(&org.head), own.id).await.unwrap();
        assert!(outcome.decision.is_authorized());
    }

    #[tokio::test]
    async fn test_sdw_without_manager_is_out_of_every_supervisor_reach() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let guard = CaseAccessGuard::new(db.db());

        let orphan = EmployeeFactory::new("orphan", Role::Sdw, None)
            .insert(db.db())
            .await;
        let case = CaseFactory::assigned_to(&orphan).insert(db.db()).await;

        for supervisor in [&org.supervisor, &org.other_supervisor] {
            let outcome = guard.decide(Some(supervisor), case.id).await.unwrap();
            assert_eq!(
                outcome.decision,
                AccessDecision::Denied(DenialReason::NotUnderSupervision)
            );
        }
        assert!(
            guard
                .decide(Some(&orphan), case.id)
                .await
                .unwrap()
                .decision
                .is_authorized()
        );
    }

    #[tokio::test]
    async fn test_denials_map_to_http_statuses() {
        use actix_web::ResponseError;
        use actix_web::http::StatusCode;

        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let guard = CaseAccessGuard::new(db.db());
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;

        let status = |err: CaseworkError| err.status_code();

        let unauthenticated = guard
            .authorize(None, case.id, AccessIntent::Read)
            .await
            .unwrap_err();
        assert_eq!(status(unauthenticated), StatusCode::UNAUTHORIZED);

        let missing = guard
            .authorize(Some(&org.sdw), Uuid::new_v4(), AccessIntent::Read)
            .await
            .unwrap_err();
        assert_eq!(status(missing), StatusCode::NOT_FOUND);

        let forbidden = guard
            .authorize(Some(&org.other_supervisor), case.id, AccessIntent::Read)
            .await
            .unwrap_err();
        assert_eq!(status(forbidden), StatusCode::FORBIDDEN);

        let authorized = guard
            .authorize(Some(&org.supervisor), case.id, AccessIntent::Mutate)
            .await
            .unwrap();
        assert_eq!(authorized.case.id, case.id);
        assert_eq!(authorized.handler.map(|h| h.id), Some(org.sdw.id));
    }
}
