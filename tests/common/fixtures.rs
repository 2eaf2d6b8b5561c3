//! Test fixtures and data factories
//!
//! All factories write real rows; nothing here is mocked.

use casework::core::models::{Employee, Role, SponsoredMember};
use casework::storage::database::Database;
use casework::utils::auth::hash_password;
use chrono::{NaiveDate, Utc};
use std::sync::OnceLock;
use uuid::Uuid;

/// Password of every seeded employee
pub const TEST_PASSWORD: &str = "casework-2024";

/// Argon2 is slow in debug builds; hash once per test binary
fn test_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(TEST_PASSWORD).expect("hash test password"))
        .clone()
}

/// Factory for employees
pub struct EmployeeFactory {
    employee: Employee,
}

impl EmployeeFactory {
    pub fn new(username: &str, role: Role, manager: Option<&Employee>) -> Self {
        let now = Utc::now();
        Self {
            employee: Employee {
                id: Uuid::new_v4(),
                username: username.to_string(),
                first_name: username.to_string(),
                last_name: "Tester".to_string(),
                email: Some(format!("{}@example.org", username)),
                password_hash: test_password_hash(),
                role,
                manager: manager.map(|m| m.id),
                spu: None,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
        }
    }

    /// Point the manager link at an arbitrary id, existing or not
    pub fn with_manager_id(mut self, manager: Option<Uuid>) -> Self {
        self.employee.manager = manager;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.employee.is_active = false;
        self
    }

    pub fn build(self) -> Employee {
        self.employee
    }

    pub async fn insert(self, db: &Database) -> Employee {
        db.create_employee(&self.employee)
            .await
            .expect("insert employee")
    }
}

/// Factory for cases
pub struct CaseFactory {
    case: SponsoredMember,
}

impl CaseFactory {
    pub fn assigned_to(caseworker: &Employee) -> Self {
        Self::assigned_to_id(caseworker.id)
    }

    pub fn assigned_to_id(caseworker: Uuid) -> Self {
        let now = Utc::now();
        let suffix = &Uuid::new_v4().simple().to_string()[..8];
        Self {
            case: SponsoredMember {
                id: Uuid::new_v4(),
                sm_number: format!("SM-{}", suffix),
                first_name: "Maria".to_string(),
                middle_name: Some("Lopez".to_string()),
                last_name: "Santos".to_string(),
                sex: Some("F".to_string()),
                date_of_birth: NaiveDate::from_ymd_opt(2011, 7, 2),
                address: Some("Barangay 12".to_string()),
                problem_presented: None,
                observation_findings: None,
                assigned_caseworker: caseworker,
                spu: None,
                is_active: true,
                version: 0,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn build(self) -> SponsoredMember {
        self.case
    }

    pub async fn insert(self, db: &Database) -> SponsoredMember {
        db.create_case(&self.case).await.expect("insert case")
    }
}

/// Two supervisors under one head, each with sdws
#[derive(Debug, Clone)]
pub struct Org {
    pub head: Employee,
    pub supervisor: Employee,
    pub sdw: Employee,
    pub peer_sdw: Employee,
    pub other_supervisor: Employee,
    pub other_sdw: Employee,
}

impl Org {
    pub async fn seed(db: &Database) -> Self {
        let head = EmployeeFactory::new("head", Role::Head, None).insert(db).await;
        let supervisor = EmployeeFactory::new("supervisor", Role::Supervisor, Some(&head))
            .insert(db)
            .await;
        let sdw = EmployeeFactory::new("sdw", Role::Sdw, Some(&supervisor))
            .insert(db)
            .await;
        let peer_sdw = EmployeeFactory::new("peer", Role::Sdw, Some(&supervisor))
            .insert(db)
            .await;
        let other_supervisor =
            EmployeeFactory::new("other_supervisor", Role::Supervisor, Some(&head))
                .insert(db)
                .await;
        let other_sdw = EmployeeFactory::new("other_sdw", Role::Sdw, Some(&other_supervisor))
            .insert(db)
            .await;

        Self {
            head,
            supervisor,
            sdw,
            peer_sdw,
            other_supervisor,
            other_sdw,
        }
    }

    /// Every seeded employee
    pub fn everyone(&self) -> [&Employee; 6] {
        [
            &self.head,
            &self.supervisor,
            &self.sdw,
            &self.peer_sdw,
            &self.other_supervisor,
            &self.other_sdw,
        ]
    }
}
