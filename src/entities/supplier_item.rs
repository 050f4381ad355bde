use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, FromQueryResult};
use serde::{Deserialize, Serialize};

/// A supplier's price for one item. Linked to `items` by the `item_code`
/// value only; there is no foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supplier_name: String,
    pub item_code: String,
    pub package_qty: Decimal,
    pub cost_price: Decimal,
    pub item_model: String,
    pub create_time: DateTime<Utc>,
    pub creator: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemCode",
        to = "super::item::Column::ItemCode"
    )]
    Item,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Supplier item joined with the catalogue item sharing its code.
/// Read-only; built by the supplier item search.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierItemDto {
    pub id: i32,
    pub supplier_name: String,
    pub item_code: String,
    pub package_qty: Decimal,
    pub cost_price: Decimal,
    pub item_model: String,
    pub create_time: DateTime<Utc>,
    pub creator: Option<String>,
    pub item_id: i32,
    pub item_name: String,
    pub volume: Decimal,
    pub price: Decimal,
    pub item_cate: Option<String>,
    pub item_style: Option<String>,
    pub pic_path: Option<String>,
}
