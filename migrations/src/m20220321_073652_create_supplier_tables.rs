use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20220321_073652_create_supplier_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Items::Table)
                    .add_column(
                        ColumnDef::new(Items::CostPrice)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupplierItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupplierItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SupplierItems::ItemCode).string().not_null())
                    .col(ColumnDef::new(SupplierItems::PackageQty).double().not_null())
                    .col(ColumnDef::new(SupplierItems::CostPrice).double().not_null())
                    .col(ColumnDef::new(SupplierItems::ItemModel).string().not_null())
                    .col(
                        ColumnDef::new(SupplierItems::CreateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SupplierItems::Creator).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Suppliers::SupplierName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Suppliers::SupplierCode)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Suppliers::SupplierMobile).string().null())
                    .col(ColumnDef::new(Suppliers::SupplierAddress).string().null())
                    .col(
                        ColumnDef::new(Suppliers::CreateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Suppliers::Creator).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupplierItems::Table).to_owned())
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Items::Table)
                    .drop_column(Items::CostPrice)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    CostPrice,
}

#[derive(DeriveIden)]
enum SupplierItems {
    Table,
    Id,
    ItemCode,
    PackageQty,
    CostPrice,
    ItemModel,
    CreateTime,
    Creator,
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    Id,
    SupplierName,
    SupplierCode,
    SupplierMobile,
    SupplierAddress,
    CreateTime,
    Creator,
}
