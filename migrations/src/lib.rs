pub use sea_orm_migration::prelude::*;

mod m20220319_000001_create_users_and_items_tables;
mod m20220320_082459_expand_items_and_users;
mod m20220321_073652_create_supplier_tables;
mod m20220321_075017_add_supplier_name_to_supplier_items;
mod m20220322_000005_add_unique_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220319_000001_create_users_and_items_tables::Migration),
            Box::new(m20220320_082459_expand_items_and_users::Migration),
            Box::new(m20220321_073652_create_supplier_tables::Migration),
            Box::new(m20220321_075017_add_supplier_name_to_supplier_items::Migration),
            Box::new(m20220322_000005_add_unique_indexes::Migration),
        ]
    }
}

/// Epoch used to back-fill `create_time` on rows that predate the column.
/// SQLite only accepts constant defaults in `ALTER TABLE ... ADD COLUMN`.
pub(crate) const CREATE_TIME_BACKFILL: &str = "1970-01-01 00:00:00+00:00";
