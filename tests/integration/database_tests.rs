//! Database integration tests
//!
//! Storage operations against a real SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::database::test_db_config;
    use crate::common::{CaseFactory, EmployeeFactory, TestDatabase};
    use crate::{assert_err, assert_ok};
    use casework::CaseworkError;
    use casework::config::{DatabaseConfig, StorageConfig};
    use casework::core::models::{CaseScope, InterventionKind, Role, Spu};
    use casework::storage::StorageLayer;
    use casework::storage::database::{Database, DatabaseBackendType};
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_database_health_check() {
        let db = assert_ok!(Database::new(&test_db_config()).await);
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);

        assert_ok!(db.migrate().await);
        // Migrations are idempotent
        assert_ok!(db.migrate().await);
        assert_ok!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_file_database_creates_directory_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("casework.db");
        let config = StorageConfig {
            database: DatabaseConfig {
                url: format!("sqlite://{}?mode=rwc", path.display()),
                max_connections: 1,
                ..test_db_config()
            },
        };

        let employee = {
            let storage = assert_ok!(StorageLayer::new(&config).await);
            assert!(storage.health_check().await.overall);
            EmployeeFactory::new("persisted", Role::Head, None)
                .insert(storage.db())
                .await
        };
        assert!(path.exists());

        let storage = assert_ok!(StorageLayer::new(&config).await);
        let found = storage
            .db()
            .find_employee_by_username("persisted")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, employee.id);
    }

    #[tokio::test]
    async fn test_employee_round_trip_and_uniqueness() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;

        let found = db.db().find_employee_by_id(org.sdw.id).await.unwrap().unwrap();
        assert_eq!(found.role, Role::Sdw);
        assert_eq!(found.manager, Some(org.supervisor.id));
        assert!(found.password_hash.starts_with("$argon2"));

        let duplicate = EmployeeFactory::new("sdw", Role::Sdw, Some(&org.supervisor)).build();
        let err = assert_err!(db.db().create_employee(&duplicate).await);
        assert!(matches!(err, CaseworkError::Conflict(_)));

        let team = db
            .db()
            .list_employees_managed_by(org.supervisor.id, Some(&Role::Sdw))
            .await
            .unwrap();
        assert_eq!(team.len(), 2);
        assert_eq!(db.db().count_employees().await.unwrap(), 6);

        let deactivated = db.db().set_employee_active(org.peer_sdw.id, false).await.unwrap();
        assert!(!deactivated.is_active);
        let err = assert_err!(db.db().set_employee_active(Uuid::new_v4(), false).await);
        assert!(matches!(err, CaseworkError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_case_lookup_and_scope_listing() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;

        let mine = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;
        let theirs = CaseFactory::assigned_to(&org.other_sdw).insert(db.db()).await;

        let by_number = db
            .db()
            .find_case_by_sm_number(&mine.sm_number)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_number.id, mine.id);
        assert_eq!(by_number.date_of_birth, mine.date_of_birth);

        let duplicate = CaseFactory::assigned_to(&org.sdw).build();
        let duplicate = casework::core::models::SponsoredMember {
            sm_number: mine.sm_number.clone(),
            ..duplicate
        };
        let err = assert_err!(db.db().create_case(&duplicate).await);
        assert!(matches!(err, CaseworkError::Conflict(_)));

        let all = db.db().list_cases(&CaseScope::All, None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|c| c.id == theirs.id));

        let scoped = db
            .db()
            .list_cases(&CaseScope::HandledBy(vec![org.sdw.id]), None)
            .await
            .unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, mine.id);

        let empty = db
            .db()
            .list_cases(&CaseScope::HandledBy(vec![]), None)
            .await
            .unwrap();
        assert!(empty.is_empty());

        let closed = db
            .db()
            .list_cases(&CaseScope::All, Some(false))
            .await
            .unwrap();
        assert!(closed.is_empty());
        assert_eq!(
            db.db().count_open_cases_handled_by(org.other_sdw.id).await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_interventions_and_reports_are_numbered() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;

        for expected in 1..=3 {
            let record = db
                .db()
                .create_intervention(case.id, InterventionKind::Financial, json!({}), org.sdw.id)
                .await
                .unwrap();
            assert_eq!(record.intervention_number, expected);
        }
        let counseling = db
            .db()
            .create_intervention(case.id, InterventionKind::Counseling, json!({}), org.sdw.id)
            .await
            .unwrap();
        assert_eq!(counseling.intervention_number, 1);

        let financial = db
            .db()
            .list_interventions(case.id, Some(InterventionKind::Financial))
            .await
            .unwrap();
        let numbers: Vec<i32> = financial.iter().map(|i| i.intervention_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let missing = db
            .db()
            .find_intervention(case.id, Uuid::new_v4())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_statistics_follow_scope() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;

        let now = Utc::now();
        let spu = db
            .db()
            .create_spu(&Spu {
                id: Uuid::new_v4(),
                name: "Coastal".to_string(),
                is_active: true,
                created_at: now,
            })
            .await
            .unwrap();

        let mut in_spu = CaseFactory::assigned_to(&org.sdw).build();
        in_spu.spu = Some(spu.id);
        let in_spu = db.db().create_case(&in_spu).await.unwrap();
        CaseFactory::assigned_to(&org.other_sdw).insert(db.db()).await;

        db.db()
            .create_intervention(in_spu.id, InterventionKind::HomeVisit, json!({}), org.sdw.id)
            .await
            .unwrap();
        db.db()
            .create_closure(in_spu.id, "Graduated", org.sdw.id)
            .await
            .unwrap();

        let all = db.db().case_statistics(&CaseScope::All).await.unwrap();
        assert_eq!(all.active_cases, 2);
        assert_eq!(all.closed_cases, 0);
        assert_eq!(all.pending_closures, 1);
        assert_eq!(all.interventions_by_kind["home_visit"], 1);
        assert_eq!(all.cases_per_spu[&Some(spu.id)], 1);
        assert_eq!(all.cases_per_spu[&None], 1);

        let other = db
            .db()
            .case_statistics(&CaseScope::HandledBy(vec![org.other_sdw.id]))
            .await
            .unwrap();
        assert_eq!(other.active_cases, 1);
        assert_eq!(other.pending_closures, 0);
        assert_eq!(other.interventions_by_kind["home_visit"], 0);

        let none = db
            .db()
            .case_statistics(&CaseScope::HandledBy(vec![]))
            .await
            .unwrap();
        assert_eq!(none.active_cases, 0);
        assert_eq!(none.interventions_by_kind.len(), InterventionKind::ALL.len());
    }

    #[tokio::test]
    async fn test_inactive_employee_fixture() {
        let db = TestDatabase::new().await;
        let head = EmployeeFactory::new("retired", Role::Head, None)
            .inactive()
            .insert(db.db())
            .await;
        assert!(!head.is_active);

        let stored = db.db().find_employee_by_id(head.id).await.unwrap().unwrap();
        assert!(!stored.is_active);
    }
}
