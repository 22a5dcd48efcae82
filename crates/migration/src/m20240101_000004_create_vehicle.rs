//! Create `vehicle` table.
//! Owner and mechanic are nullable owning references; deleting a mechanic that
//! still services vehicles is refused by the database as well as the service.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vehicle::Id).integer().not_null().auto_increment().primary_key())
                    .col(string_len(Vehicle::Reg, 32).unique_key())
                    .col(string_len(Vehicle::Make, 64))
                    .col(string_len(Vehicle::Model, 64))
                    .col(ColumnDef::new(Vehicle::OwnerId).integer().null())
                    .col(ColumnDef::new(Vehicle::MechanicId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_owner")
                            .from(Vehicle::Table, Vehicle::OwnerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_mechanic")
                            .from(Vehicle::Table, Vehicle::MechanicId)
                            .to(Mechanic::Table, Mechanic::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
    Reg,
    Make,
    Model,
    OwnerId,
    MechanicId,
}

#[derive(DeriveIden)]
enum Customer { Table, Id }

#[derive(DeriveIden)]
enum Mechanic { Table, Id }
