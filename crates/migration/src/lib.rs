//! Migrator registering the garage schema in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_garage;
mod m20240101_000002_create_customer;
mod m20240101_000003_create_mechanic;
mod m20240101_000004_create_vehicle;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_garage::Migration),
            Box::new(m20240101_000002_create_customer::Migration),
            Box::new(m20240101_000003_create_mechanic::Migration),
            Box::new(m20240101_000004_create_vehicle::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}
