use crate::{
    db::{paginate, DbPool, Page, SearchQuery},
    entities::supplier,
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// Body of supplier create and update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SupplierInput {
    pub id: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "supplierName must not be empty"))]
    pub supplier_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "supplierCode must not be empty"))]
    pub supplier_code: String,
    pub supplier_mobile: Option<String>,
    pub supplier_address: Option<String>,
}

/// Service for managing suppliers
#[derive(Clone)]
pub struct SupplierService {
    db_pool: Arc<DbPool>,
}

impl SupplierService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Newest first; `wd` matches supplier name or code
    #[instrument(skip(self))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Page<supplier::Model>, ServiceError> {
        let filter = super::contains_any(
            query.term(),
            &[supplier::Column::SupplierName, supplier::Column::SupplierCode],
        );

        Ok(paginate(
            &*self.db_pool,
            supplier::Entity::find(),
            filter,
            supplier::Column::Id,
            query.page_request(),
        )
        .await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<supplier::Model, ServiceError> {
        supplier::Entity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Supplier {} not found", id)))
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        input: SupplierInput,
        creator: &str,
    ) -> Result<supplier::Model, ServiceError> {
        input.validate()?;

        let model = supplier::ActiveModel {
            id: input.id.map(Set).unwrap_or(NotSet),
            supplier_name: Set(input.supplier_name),
            supplier_code: Set(input.supplier_code),
            supplier_mobile: Set(input.supplier_mobile),
            supplier_address: Set(input.supplier_address),
            create_time: Set(Utc::now()),
            creator: Set(Some(creator.to_string())),
        };

        let created = model
            .insert(&*self.db_pool)
            .await
            .map_err(|e| ServiceError::from_write(e, "A supplier with this id already exists"))?;

        info!(supplier_id = created.id, "Supplier created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i32,
        input: SupplierInput,
    ) -> Result<supplier::Model, ServiceError> {
        input.validate()?;

        let existing = supplier::Entity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::BadRequest(format!("Supplier {} does not exist", id)))?;

        let mut model: supplier::ActiveModel = existing.into();
        model.supplier_name = Set(input.supplier_name);
        model.supplier_code = Set(input.supplier_code);
        model.supplier_mobile = Set(input.supplier_mobile);
        model.supplier_address = Set(input.supplier_address);

        let updated = model.update(&*self.db_pool).await?;

        info!(supplier_id = id, "Supplier updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = supplier::Entity::delete_by_id(id)
            .exec(&*self.db_pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::BadRequest(format!(
                "Supplier {} does not exist",
                id
            )));
        }

        info!(supplier_id = id, "Supplier deleted");
        Ok(())
    }
}
