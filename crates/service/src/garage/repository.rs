use async_trait::async_trait;

use super::domain::{Mechanic, Vehicle};
use crate::errors::ServiceError;

/// Vehicle side of the Entity Store.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// All vehicles in store order.
    async fn list_all(&self) -> Result<Vec<Vehicle>, ServiceError>;
    /// Vehicles whose make equals `make` exactly (case-sensitive).
    async fn list_by_make(&self, make: &str) -> Result<Vec<Vehicle>, ServiceError>;
    async fn find_by_reg(&self, reg: &str) -> Result<Option<Vehicle>, ServiceError>;
    /// Insert when `vehicle.id` is `None`. Otherwise update the stored row, writing
    /// only its mechanic association. Returns the stored vehicle.
    async fn save(&self, vehicle: &Vehicle) -> Result<Vehicle, ServiceError>;
}

/// Mechanic side of the Entity Store.
#[async_trait]
pub trait MechanicRepository: Send + Sync {
    async fn find_by_mid(&self, mid: &str) -> Result<Option<Mechanic>, ServiceError>;
    /// Registrations of the vehicles currently pointing at `mechanic`.
    async fn serviced_vehicles(&self, mechanic: &Mechanic) -> Result<Vec<String>, ServiceError>;
    async fn delete(&self, mechanic: &Mechanic) -> Result<(), ServiceError>;
}

/// In-memory store for tests and doc examples.
///
/// Rows keep only owning references (vehicle → owner/mechanic, mechanic →
/// garage) and are hydrated on read, like the SeaORM store. Every trait call is
/// appended to a journal so tests can assert which lookups happened.
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use crate::garage::domain::{Customer, Garage};

    #[derive(Debug, Clone)]
    struct MechanicRow {
        id: i32,
        mid: String,
        name: String,
        salary: f64,
        garage_id: Option<i32>,
    }

    #[derive(Debug, Clone)]
    struct VehicleRow {
        id: i32,
        reg: String,
        make: String,
        model: String,
        owner_id: Option<i32>,
        mechanic_id: Option<i32>,
    }

    #[derive(Debug, Default)]
    struct State {
        last_id: i32,
        customers: Vec<Customer>,
        garages: Vec<Garage>,
        mechanics: Vec<MechanicRow>,
        vehicles: Vec<VehicleRow>,
    }

    impl State {
        fn next_id(&mut self) -> i32 {
            self.last_id += 1;
            self.last_id
        }

        fn mechanic(&self, row: &MechanicRow) -> Mechanic {
            Mechanic {
                id: row.id,
                mid: row.mid.clone(),
                name: row.name.clone(),
                salary: row.salary,
                garage: row.garage_id.and_then(|gid| self.garages.iter().find(|g| g.id == gid).cloned()),
            }
        }

        fn vehicle(&self, row: &VehicleRow) -> Vehicle {
            Vehicle {
                id: Some(row.id),
                reg: row.reg.clone(),
                make: row.make.clone(),
                model: row.model.clone(),
                owner: row.owner_id.and_then(|cid| self.customers.iter().find(|c| c.id == cid).cloned()),
                mechanic: row
                    .mechanic_id
                    .and_then(|mid| self.mechanics.iter().find(|m| m.id == mid))
                    .map(|m| self.mechanic(m)),
            }
        }
    }

    #[derive(Debug, Default)]
    pub struct InMemoryGarageRepository {
        state: Mutex<State>,
        journal: Mutex<Vec<String>>,
    }

    impl InMemoryGarageRepository {
        pub fn new() -> Self { Self::default() }

        fn state(&self) -> MutexGuard<'_, State> {
            self.state.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn record(&self, call: String) {
            self.journal.lock().unwrap_or_else(PoisonError::into_inner).push(call);
        }

        /// Trait calls seen so far, e.g. `vehicle.find_by_reg:ABC123`.
        pub fn calls(&self) -> Vec<String> {
            self.journal.lock().unwrap_or_else(PoisonError::into_inner).clone()
        }

        pub fn clear_calls(&self) {
            self.journal.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }

        pub fn add_garage(&self, gid: &str, location: &str, budget: i32) -> Garage {
            let mut st = self.state();
            let g = Garage { id: st.next_id(), gid: gid.into(), location: location.into(), budget };
            st.garages.push(g.clone());
            g
        }

        pub fn add_customer(&self, cid: &str, name: &str, phone: &str) -> Customer {
            let mut st = self.state();
            let c = Customer { id: st.next_id(), cid: cid.into(), name: name.into(), phone: phone.into() };
            st.customers.push(c.clone());
            c
        }

        pub fn add_mechanic(&self, mid: &str, name: &str, salary: f64, garage: Option<&Garage>) -> Mechanic {
            let mut st = self.state();
            let row = MechanicRow {
                id: st.next_id(),
                mid: mid.into(),
                name: name.into(),
                salary,
                garage_id: garage.map(|g| g.id),
            };
            st.mechanics.push(row.clone());
            st.mechanic(&row)
        }

        /// Seed a vehicle directly, bypassing the create rules (owners can only be set this way).
        pub fn add_vehicle(
            &self,
            reg: &str,
            make: &str,
            model: &str,
            owner: Option<&Customer>,
            mechanic: Option<&Mechanic>,
        ) -> Vehicle {
            let mut st = self.state();
            let row = VehicleRow {
                id: st.next_id(),
                reg: reg.into(),
                make: make.into(),
                model: model.into(),
                owner_id: owner.map(|c| c.id),
                mechanic_id: mechanic.map(|m| m.id),
            };
            st.vehicles.push(row.clone());
            st.vehicle(&row)
        }
    }

    #[async_trait]
    impl VehicleRepository for InMemoryGarageRepository {
        async fn list_all(&self) -> Result<Vec<Vehicle>, ServiceError> {
            self.record("vehicle.list_all".into());
            let st = self.state();
            Ok(st.vehicles.iter().map(|row| st.vehicle(row)).collect())
        }

        async fn list_by_make(&self, make: &str) -> Result<Vec<Vehicle>, ServiceError> {
            self.record(format!("vehicle.list_by_make:{make}"));
            let st = self.state();
            Ok(st.vehicles.iter().filter(|row| row.make == make).map(|row| st.vehicle(row)).collect())
        }

        async fn find_by_reg(&self, reg: &str) -> Result<Option<Vehicle>, ServiceError> {
            self.record(format!("vehicle.find_by_reg:{reg}"));
            let st = self.state();
            Ok(st.vehicles.iter().find(|row| row.reg == reg).map(|row| st.vehicle(row)))
        }

        async fn save(&self, vehicle: &Vehicle) -> Result<Vehicle, ServiceError> {
            self.record(format!("vehicle.save:{}", vehicle.reg));
            let mut st = self.state();
            let mechanic_id = vehicle.mechanic.as_ref().map(|m| m.id);
            let row = match vehicle.id {
                None => {
                    if st.vehicles.iter().any(|row| row.reg == vehicle.reg) {
                        return Err(ServiceError::Store(format!("unique constraint failed: vehicle.reg = {}", vehicle.reg)));
                    }
                    let row = VehicleRow {
                        id: st.next_id(),
                        reg: vehicle.reg.clone(),
                        make: vehicle.make.clone(),
                        model: vehicle.model.clone(),
                        owner_id: vehicle.owner.as_ref().map(|c| c.id),
                        mechanic_id,
                    };
                    st.vehicles.push(row.clone());
                    row
                }
                Some(id) => {
                    let row = st
                        .vehicles
                        .iter_mut()
                        .find(|row| row.id == id)
                        .ok_or_else(|| ServiceError::Store(format!("vehicle row {id} not found")))?;
                    row.mechanic_id = mechanic_id;
                    row.clone()
                }
            };
            Ok(st.vehicle(&row))
        }
    }

    #[async_trait]
    impl MechanicRepository for InMemoryGarageRepository {
        async fn find_by_mid(&self, mid: &str) -> Result<Option<Mechanic>, ServiceError> {
            self.record(format!("mechanic.find_by_mid:{mid}"));
            let st = self.state();
            Ok(st.mechanics.iter().find(|row| row.mid == mid).map(|row| st.mechanic(row)))
        }

        async fn serviced_vehicles(&self, mechanic: &Mechanic) -> Result<Vec<String>, ServiceError> {
            self.record(format!("mechanic.serviced_vehicles:{}", mechanic.mid));
            let st = self.state();
            Ok(st
                .vehicles
                .iter()
                .filter(|row| row.mechanic_id == Some(mechanic.id))
                .map(|row| row.reg.clone())
                .collect())
        }

        async fn delete(&self, mechanic: &Mechanic) -> Result<(), ServiceError> {
            self.record(format!("mechanic.delete:{}", mechanic.mid));
            let mut st = self.state();
            if st.vehicles.iter().any(|row| row.mechanic_id == Some(mechanic.id)) {
                return Err(ServiceError::Store(format!("foreign key violation: vehicle.mechanic_id = {}", mechanic.id)));
            }
            st.mechanics.retain(|row| row.id != mechanic.id);
            Ok(())
        }
    }
}
