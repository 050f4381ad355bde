use crate::{
    db::{paginate, DbPool, Page, SearchQuery},
    entities::item,
    errors::ServiceError,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// Body of item create and update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    /// Honoured on create only
    pub id: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "itemName must not be empty"))]
    pub item_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "itemCode must not be empty"))]
    pub item_code: String,
    #[serde(default)]
    pub volume: Decimal,
    #[serde(default)]
    pub package_qty: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub cost_price: Decimal,
    pub item_cate: Option<String>,
    pub item_style: Option<String>,
    pub item_model: Option<String>,
    pub pic_path: Option<String>,
}

/// Service for the item catalogue
#[derive(Clone)]
pub struct ItemService {
    db_pool: Arc<DbPool>,
}

impl ItemService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Newest first; `wd` matches item name or code
    #[instrument(skip(self))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Page<item::Model>, ServiceError> {
        let filter = super::contains_any(
            query.term(),
            &[item::Column::ItemName, item::Column::ItemCode],
        );

        let page = paginate(
            &*self.db_pool,
            item::Entity::find(),
            filter,
            item::Column::Id,
            query.page_request(),
        )
        .await?;

        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<item::Model, ServiceError> {
        item::Entity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Item {} not found", id)))
    }

    /// Inserts a new item. A taken id or itemCode is rejected.
    #[instrument(skip(self, input), fields(item_code = %input.item_code))]
    pub async fn create(&self, input: ItemInput, creator: &str) -> Result<item::Model, ServiceError> {
        input.validate()?;

        let model = item::ActiveModel {
            id: input.id.map(Set).unwrap_or(NotSet),
            item_name: Set(input.item_name),
            item_code: Set(input.item_code),
            volume: Set(input.volume),
            package_qty: Set(input.package_qty),
            price: Set(input.price),
            cost_price: Set(input.cost_price),
            item_cate: Set(input.item_cate),
            item_style: Set(input.item_style),
            item_model: Set(input.item_model),
            pic_path: Set(input.pic_path),
            create_time: Set(Utc::now()),
            creator: Set(Some(creator.to_string())),
        };

        let created = model.insert(&*self.db_pool).await.map_err(|e| {
            ServiceError::from_write(e, "An item with this id or itemCode already exists")
        })?;

        info!(item_id = created.id, "Item created");
        Ok(created)
    }

    /// Replaces every mutable field of item `id`
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ItemInput) -> Result<item::Model, ServiceError> {
        input.validate()?;

        let existing = item::Entity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::BadRequest(format!("Item {} does not exist", id)))?;

        let mut model: item::ActiveModel = existing.into();
        model.item_name = Set(input.item_name);
        model.item_code = Set(input.item_code);
        model.volume = Set(input.volume);
        model.package_qty = Set(input.package_qty);
        model.price = Set(input.price);
        model.cost_price = Set(input.cost_price);
        model.item_cate = Set(input.item_cate);
        model.item_style = Set(input.item_style);
        model.item_model = Set(input.item_model);
        model.pic_path = Set(input.pic_path);

        let updated = model
            .update(&*self.db_pool)
            .await
            .map_err(|e| ServiceError::from_write(e, "itemCode is already used by another item"))?;

        info!(item_id = id, "Item updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = item::Entity::delete_by_id(id).exec(&*self.db_pool).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::BadRequest(format!("Item {} does not exist", id)));
        }

        info!(item_id = id, "Item deleted");
        Ok(())
    }
}
