pub mod auth;
pub mod common;
pub mod items;
pub mod supplier_items;
pub mod suppliers;
pub mod upload;
pub mod users;

use crate::{
    db::DbPool,
    services::{
        items::ItemService, supplier_items::SupplierItemService, suppliers::SupplierService,
        users::UserService,
    },
};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub items: Arc<ItemService>,
    pub suppliers: Arc<SupplierService>,
    pub supplier_items: Arc<SupplierItemService>,
    pub users: Arc<UserService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            items: Arc::new(ItemService::new(db_pool.clone())),
            suppliers: Arc::new(SupplierService::new(db_pool.clone())),
            supplier_items: Arc::new(SupplierItemService::new(db_pool.clone())),
            users: Arc::new(UserService::new(db_pool)),
        }
    }
}
