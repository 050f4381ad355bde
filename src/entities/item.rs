use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalogue item. `item_code` is unique and is the key supplier price
/// lists refer to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_name: String,
    #[sea_orm(unique)]
    pub item_code: String,
    pub volume: Decimal,
    pub package_qty: Decimal,
    pub price: Decimal,
    pub cost_price: Decimal,
    pub item_cate: Option<String>,
    pub item_style: Option<String>,
    pub item_model: Option<String>,
    /// Public path of the item image, e.g. `/images/1650000000000.png`
    pub pic_path: Option<String>,
    pub create_time: DateTime<Utc>,
    pub creator: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
