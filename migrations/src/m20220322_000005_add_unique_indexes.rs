use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20220322_000005_add_unique_indexes"
    }
}

const USERNAME_INDEX: &str = "idx_users_username";
const ITEM_CODE_INDEX: &str = "idx_items_item_code";
const SUPPLIER_ITEM_CODE_INDEX: &str = "idx_supplier_items_item_code";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(USERNAME_INDEX)
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(ITEM_CODE_INDEX)
                    .table(Items::Table)
                    .col(Items::ItemCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Join key for the supplier price list search.
        manager
            .create_index(
                Index::create()
                    .name(SUPPLIER_ITEM_CODE_INDEX)
                    .table(SupplierItems::Table)
                    .col(SupplierItems::ItemCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [SUPPLIER_ITEM_CODE_INDEX, ITEM_CODE_INDEX, USERNAME_INDEX] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Username,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    ItemCode,
}

#[derive(DeriveIden)]
enum SupplierItems {
    Table,
    ItemCode,
}
