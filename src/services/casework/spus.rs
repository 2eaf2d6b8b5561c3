use super::{CaseworkService, require_requester, require_role};
use crate::core::models::{Employee, Role, Spu};
use crate::utils::error::Result;
use crate::utils::required_text;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

/// Body of an SPU creation
#[derive(Debug, Clone, Deserialize)]
pub struct NewSpu {
    pub name: String,
}

impl CaseworkService {
    pub async fn list_spus(&self, requester: Option<&Employee>) -> Result<Vec<Spu>> {
        require_requester(requester)?;
        self.db().list_spus().await
    }

    pub async fn create_spu(&self, requester: Option<&Employee>, input: NewSpu) -> Result<Spu> {
        let requester = require_requester(requester)?;
        require_role(requester, &[Role::Head], "create SPUs")?;

        let spu = Spu {
            id: Uuid::new_v4(),
            name: required_text("name", &input.name)?,
            is_active: true,
            created_at: Utc::now(),
        };

        let spu = self.db().create_spu(&spu).await?;
        info!("SPU {} created by {}", spu.name, requester.id);
        Ok(spu)
    }
}
