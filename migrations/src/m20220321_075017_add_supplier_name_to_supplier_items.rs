use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20220321_075017_add_supplier_name_to_supplier_items"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SupplierItems::Table)
                    .add_column(
                        ColumnDef::new(SupplierItems::SupplierName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SupplierItems::Table)
                    .drop_column(SupplierItems::SupplierName)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum SupplierItems {
    Table,
    SupplierName,
}
