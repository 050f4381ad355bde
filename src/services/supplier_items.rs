use crate::{
    db::{paginate, DbPool, Page, SearchQuery},
    entities::{
        item,
        supplier_item::{self, SupplierItemDto},
    },
    errors::ServiceError,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, JoinType,
    QuerySelect, RelationTrait, Select, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// Body of supplier item create and update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SupplierItemInput {
    pub id: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "supplierName must not be empty"))]
    pub supplier_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "itemCode must not be empty"))]
    pub item_code: String,
    #[serde(default)]
    pub package_qty: Decimal,
    #[serde(default)]
    pub cost_price: Decimal,
    #[serde(default)]
    pub item_model: String,
}

/// Supplier price lists
#[derive(Clone)]
pub struct SupplierItemService {
    db_pool: Arc<DbPool>,
}

/// `supplier_items INNER JOIN items ON item_code`, projected onto
/// [`SupplierItemDto`].
fn joined_select() -> Select<supplier_item::Entity> {
    supplier_item::Entity::find()
        .select_only()
        .column(supplier_item::Column::Id)
        .column(supplier_item::Column::SupplierName)
        .column(supplier_item::Column::ItemCode)
        .column(supplier_item::Column::PackageQty)
        .column(supplier_item::Column::CostPrice)
        .column(supplier_item::Column::ItemModel)
        .column(supplier_item::Column::CreateTime)
        .column(supplier_item::Column::Creator)
        .column_as(item::Column::Id, "item_id")
        .column(item::Column::ItemName)
        .column(item::Column::Volume)
        .column(item::Column::Price)
        .column(item::Column::ItemCate)
        .column(item::Column::ItemStyle)
        .column(item::Column::PicPath)
        .join(JoinType::InnerJoin, supplier_item::Relation::Item.def())
}

impl SupplierItemService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Newest supplier item first. Rows whose code matches no catalogue
    /// item are left out. `wd` matches item model, item code or item name.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Page<SupplierItemDto>, ServiceError> {
        let filter = query.term().map(|wd| {
            Condition::any()
                .add(super::contains_literal(supplier_item::Column::ItemModel, wd))
                .add(super::contains_literal(supplier_item::Column::ItemCode, wd))
                .add(super::contains_literal(item::Column::ItemName, wd))
        });

        Ok(paginate(
            &*self.db_pool,
            joined_select(),
            filter,
            supplier_item::Column::Id,
            query.page_request(),
        )
        .await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<supplier_item::Model, ServiceError> {
        supplier_item::Entity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Supplier item {} not found", id)))
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        input: SupplierItemInput,
        creator: &str,
    ) -> Result<supplier_item::Model, ServiceError> {
        input.validate()?;

        let model = supplier_item::ActiveModel {
            id: input.id.map(Set).unwrap_or(NotSet),
            supplier_name: Set(input.supplier_name),
            item_code: Set(input.item_code),
            package_qty: Set(input.package_qty),
            cost_price: Set(input.cost_price),
            item_model: Set(input.item_model),
            create_time: Set(Utc::now()),
            creator: Set(Some(creator.to_string())),
        };

        let created = model.insert(&*self.db_pool).await.map_err(|e| {
            ServiceError::from_write(e, "A supplier item with this id already exists")
        })?;

        info!(supplier_item_id = created.id, "Supplier item created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i32,
        input: SupplierItemInput,
    ) -> Result<supplier_item::Model, ServiceError> {
        input.validate()?;

        let existing = supplier_item::Entity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| {
                ServiceError::BadRequest(format!("Supplier item {} does not exist", id))
            })?;

        let mut model: supplier_item::ActiveModel = existing.into();
        model.supplier_name = Set(input.supplier_name);
        model.item_code = Set(input.item_code);
        model.package_qty = Set(input.package_qty);
        model.cost_price = Set(input.cost_price);
        model.item_model = Set(input.item_model);

        let updated = model.update(&*self.db_pool).await?;

        info!(supplier_item_id = id, "Supplier item updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = supplier_item::Entity::delete_by_id(id)
            .exec(&*self.db_pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::BadRequest(format!(
                "Supplier item {} does not exist",
                id
            )));
        }

        info!(supplier_item_id = id, "Supplier item deleted");
        Ok(())
    }
}
