use crate::auth::access::AccessDirectory;
use crate::core::models::{Employee, SponsoredMember};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::types::SeaOrmDatabase;

#[async_trait]
impl AccessDirectory for SeaOrmDatabase {
    async fn find_case(&self, case_id: Uuid) -> Result<Option<SponsoredMember>> {
        self.find_case_by_id(case_id).await
    }

    async fn find_employee(&self, employee_id: Uuid) -> Result<Option<Employee>> {
        self.find_employee_by_id(employee_id).await
    }
}
