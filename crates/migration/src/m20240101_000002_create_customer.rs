//! Create `customer` table. `cid` is the business code.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Customer::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Customer::Cid, 32).unique_key())
                    .col(string_len(Customer::Name, 128))
                    .col(string_len(Customer::Phone, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
    Cid,
    Name,
    Phone,
}
