use crate::core::models::Spu;
use crate::utils::error::{CaseworkError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, spu};
use super::types::{SeaOrmDatabase, write_error};

impl SeaOrmDatabase {
    pub async fn find_spu_by_id(&self, spu_id: Uuid) -> Result<Option<Spu>> {
        debug!("Finding SPU by ID: {}", spu_id);

        let model = entities::Spu::find_by_id(spu_id)
            .one(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(model.map(|m| m.to_domain_spu()))
    }

    pub async fn list_spus(&self) -> Result<Vec<Spu>> {
        let models = entities::Spu::find()
            .order_by_asc(spu::Column::Name)
            .all(&self.db)
            .await
            .map_err(CaseworkError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_spu()).collect())
    }

    pub async fn create_spu(&self, spu: &Spu) -> Result<Spu> {
        debug!("Creating SPU: {}", spu.name);

        entities::Spu::insert(spu::Model::from_domain_spu(spu))
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, "SPU"))?;

        Ok(spu.clone())
    }
}
