use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Vehicle: filter by make
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_make")
                    .table(Vehicle::Table)
                    .col(Vehicle::Make)
                    .to_owned(),
            )
            .await?;

        // Vehicle: serviced-vehicles lookup for the delete guard
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_mechanic")
                    .table(Vehicle::Table)
                    .col(Vehicle::MechanicId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mechanic_garage")
                    .table(Mechanic::Table)
                    .col(Mechanic::GarageId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_mechanic_garage").table(Mechanic::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_vehicle_mechanic").table(Vehicle::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_vehicle_make").table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, Make, MechanicId }

#[derive(DeriveIden)]
enum Mechanic { Table, GarageId }
