use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::garage::{
    repo::SeaOrmGarageRepository,
    repository::{MechanicRepository, VehicleRepository},
    MechanicService, VehicleService,
};

/// Shared handler state. Built once per process and cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub vehicles: Arc<VehicleService>,
    pub mechanics: Arc<MechanicService>,
}

impl ServerState {
    /// Services over the SeaORM store.
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmGarageRepository::new(db)))
    }

    /// Services over any store implementing both repository halves.
    pub fn with_repository<R>(repo: Arc<R>) -> Self
    where
        R: VehicleRepository + MechanicRepository + 'static,
    {
        let vehicles: Arc<dyn VehicleRepository> = repo.clone();
        let mechanics: Arc<dyn MechanicRepository> = repo;
        Self {
            vehicles: Arc::new(VehicleService::new(vehicles, mechanics.clone())),
            mechanics: Arc::new(MechanicService::new(mechanics)),
        }
    }
}
