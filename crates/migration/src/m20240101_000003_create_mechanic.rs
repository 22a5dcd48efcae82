//! Create `mechanic` table with an optional link to its garage.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mechanic::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Mechanic::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Mechanic::Mid, 32).unique_key())
                    .col(string_len(Mechanic::Name, 128))
                    .col(ColumnDef::new(Mechanic::Salary).double().not_null())
                    .col(ColumnDef::new(Mechanic::GarageId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mechanic_garage")
                            .from(Mechanic::Table, Mechanic::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Mechanic::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Mechanic {
    Table,
    Id,
    Mid,
    Name,
    Salary,
    GarageId,
}

#[derive(DeriveIden)]
enum Garage { Table, Id }
