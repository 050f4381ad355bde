use sea_orm_migration::prelude::*;

use crate::CREATE_TIME_BACKFILL;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20220320_082459_expand_items_and_users"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        alter(manager, Table::alter().table(Items::Table).drop_column(Items::IsCompleted)).await?;
        alter(
            manager,
            Table::alter()
                .table(Items::Table)
                .rename_column(Items::Title, Items::PicPath),
        )
        .await?;

        for mut column in [
            ColumnDef::new(Users::CreateTime)
                .timestamp_with_time_zone()
                .not_null()
                .default(CREATE_TIME_BACKFILL)
                .to_owned(),
            ColumnDef::new(Users::Creator).string().null().to_owned(),
        ] {
            alter(manager, Table::alter().table(Users::Table).add_column(&mut column)).await?;
        }

        for mut column in [
            ColumnDef::new(Items::CreateTime)
                .timestamp_with_time_zone()
                .not_null()
                .default(CREATE_TIME_BACKFILL)
                .to_owned(),
            ColumnDef::new(Items::Creator).string().null().to_owned(),
            ColumnDef::new(Items::ItemCate).string().null().to_owned(),
            ColumnDef::new(Items::ItemCode).string().not_null().default("").to_owned(),
            ColumnDef::new(Items::ItemModel).string().null().to_owned(),
            ColumnDef::new(Items::ItemName).string().not_null().default("").to_owned(),
            ColumnDef::new(Items::ItemStyle).string().null().to_owned(),
            ColumnDef::new(Items::PackageQty).double().not_null().default(0).to_owned(),
            ColumnDef::new(Items::Price).double().not_null().default(0).to_owned(),
            ColumnDef::new(Items::Volume).double().not_null().default(0).to_owned(),
        ] {
            alter(manager, Table::alter().table(Items::Table).add_column(&mut column)).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [Users::CreateTime, Users::Creator] {
            alter(manager, Table::alter().table(Users::Table).drop_column(column)).await?;
        }

        for column in [
            Items::CreateTime,
            Items::Creator,
            Items::ItemCate,
            Items::ItemCode,
            Items::ItemModel,
            Items::ItemName,
            Items::ItemStyle,
            Items::PackageQty,
            Items::Price,
            Items::Volume,
        ] {
            alter(manager, Table::alter().table(Items::Table).drop_column(column)).await?;
        }

        alter(
            manager,
            Table::alter()
                .table(Items::Table)
                .rename_column(Items::PicPath, Items::Title),
        )
        .await?;
        alter(
            manager,
            Table::alter().table(Items::Table).add_column(
                ColumnDef::new(Items::IsCompleted)
                    .boolean()
                    .not_null()
                    .default(false),
            ),
        )
        .await
    }
}

// SQLite accepts a single change per ALTER TABLE statement.
async fn alter(manager: &SchemaManager<'_>, statement: &mut TableAlterStatement) -> Result<(), DbErr> {
    manager.alter_table(statement.to_owned()).await
}

#[derive(DeriveIden)]
enum Users {
    Table,
    CreateTime,
    Creator,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Title,
    IsCompleted,
    PicPath,
    CreateTime,
    Creator,
    ItemCate,
    ItemCode,
    ItemModel,
    ItemName,
    ItemStyle,
    PackageQty,
    Price,
    Volume,
}
