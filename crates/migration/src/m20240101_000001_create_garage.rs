//! Create `garage` table. `gid` is the business code.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Garage::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Garage::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Garage::Gid, 32).unique_key())
                    .col(string_len(Garage::Location, 128))
                    .col(integer(Garage::Budget))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Garage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Garage {
    Table,
    Id,
    Gid,
    Location,
    Budget,
}
