use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Payload, Vehicle};
use super::projection::VehicleView;
use super::repository::{MechanicRepository, VehicleRepository};
use super::rules;
use crate::errors::ServiceError;

/// Vehicle operations, independent of the web framework.
pub struct VehicleService<V: ?Sized = dyn VehicleRepository, M: ?Sized = dyn MechanicRepository> {
    vehicles: Arc<V>,
    mechanics: Arc<M>,
}

impl<V, M> VehicleService<V, M>
where
    V: VehicleRepository + ?Sized,
    M: MechanicRepository + ?Sized,
{
    pub fn new(vehicles: Arc<V>, mechanics: Arc<M>) -> Self { Self { vehicles, mechanics } }

    /// Every vehicle in store order, projected.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<VehicleView>, ServiceError> {
        let all = self.vehicles.list_all().await?;
        debug!(count = all.len(), "vehicles_listed");
        Ok(all.iter().map(VehicleView::from).collect())
    }

    /// Stored records without projection, surrogate ids and owner phone included.
    #[instrument(skip(self))]
    pub async fn list_raw(&self) -> Result<Vec<Vehicle>, ServiceError> {
        self.vehicles.list_all().await
    }

    /// Vehicles whose make matches exactly. Case-sensitive; no match is an empty list.
    #[instrument(skip(self))]
    pub async fn list_by_make(&self, make: &str) -> Result<Vec<VehicleView>, ServiceError> {
        let found = self.vehicles.list_by_make(make).await?;
        debug!(count = found.len(), "vehicles_by_make");
        Ok(found.iter().map(VehicleView::from).collect())
    }

    /// Register a vehicle from an untyped payload.
    ///
    /// Payload rules run first; the uniqueness lookup only happens once they pass.
    ///
    /// # Examples
    /// ```
    /// use service::garage::{VehicleService, repository::mock::InMemoryGarageRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryGarageRepository::new());
    /// let svc = VehicleService::new(repo.clone(), repo);
    /// let payload = serde_json::json!({"reg": "SGX1", "make": "Toyota", "model": "Corolla"});
    /// let view = tokio_test::block_on(svc.create(payload.as_object().unwrap())).unwrap();
    /// assert_eq!(view.reg, "SGX1");
    /// assert!(view.owner.is_none() && view.mechanic.is_none());
    /// ```
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: &Payload) -> Result<VehicleView, ServiceError> {
        let new_vehicle = rules::check_new_vehicle(payload)?;
        if self.vehicles.find_by_reg(&new_vehicle.reg).await?.is_some() {
            return Err(rules::duplicate_registration(&new_vehicle.reg));
        }
        let stored = self.vehicles.save(&Vehicle::from(new_vehicle)).await?;
        info!(reg = %stored.reg, id = ?stored.id, "vehicle_created");
        Ok(VehicleView::from(&stored))
    }

    /// Point the vehicle `reg` at the mechanic named by `payload.mid`.
    ///
    /// Only the mechanic association changes. A missing vehicle is reported
    /// before the mechanic is looked up.
    #[instrument(skip(self, payload))]
    pub async fn reassign_mechanic(&self, reg: &str, payload: &Payload) -> Result<VehicleView, ServiceError> {
        let mid = rules::check_mechanic_assignment(payload)?;
        let mut vehicle = self
            .vehicles
            .find_by_reg(reg)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Vehicle {reg} doesn't exist")))?;
        let mechanic = self
            .mechanics
            .find_by_mid(&mid)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Mechanic {mid} doesn't exist")))?;

        vehicle.mechanic = Some(mechanic);
        let saved = self.vehicles.save(&vehicle).await?;
        info!(reg = %saved.reg, mid = %mid, "mechanic_reassigned");
        Ok(VehicleView::from(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garage::repository::mock::InMemoryGarageRepository;
    use serde_json::{json, Value};

    fn payload(v: Value) -> Payload {
        v.as_object().cloned().expect("object payload")
    }

    fn setup() -> (Arc<InMemoryGarageRepository>, VehicleService<InMemoryGarageRepository, InMemoryGarageRepository>) {
        let repo = Arc::new(InMemoryGarageRepository::new());
        let svc = VehicleService::new(repo.clone(), repo.clone());
        (repo, svc)
    }

    #[tokio::test]
    async fn create_then_duplicate_registration() {
        let (repo, svc) = setup();
        let body = payload(json!({"reg": "ABC123", "make": "Toyota", "model": "Yaris"}));
        let view = svc.create(&body).await.unwrap();
        assert_eq!(view, VehicleView { reg: "ABC123".into(), make: "Toyota".into(), model: "Yaris".into(), owner: None, mechanic: None });

        repo.clear_calls();
        let err = svc.create(&body).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "Registration ABC123 already exists");
        assert_eq!(repo.calls(), vec!["vehicle.find_by_reg:ABC123"]);
        assert_eq!(svc.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_reg_never_reaches_the_store() {
        let (repo, svc) = setup();
        let err = svc.create(&payload(json!({"reg": "", "make": "X", "model": "Y"}))).await.unwrap_err();
        assert_eq!(err.to_string(), "Registration (reg) must be provided");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn create_with_owner_is_rejected_without_writes() {
        let (repo, svc) = setup();
        let err = svc
            .create(&payload(json!({"reg": "R", "make": "M", "model": "X", "owner": {"cid": "C001"}})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Owner should not be provided in the request");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn create_with_unrecognized_key_fails_before_lookup() {
        let (repo, svc) = setup();
        let err = svc
            .create(&payload(json!({"reg": "R", "make": "M", "model": "X", "colour": "red"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "Unrecognized field \"colour\"");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn reassign_sets_only_the_mechanic() {
        let (repo, svc) = setup();
        let c = repo.add_customer("C001", "Alan", "091");
        let g = repo.add_garage("G001", "Galway", 1000);
        repo.add_mechanic("M007", "Sean", 48000.0, Some(&g));
        repo.add_vehicle("SGX1", "Toyota", "Corolla", Some(&c), None);
        repo.clear_calls();

        let view = svc.reassign_mechanic("SGX1", &payload(json!({"mid": "M007"}))).await.unwrap();
        let mech = view.mechanic.expect("mechanic block");
        assert_eq!(mech.mid, "M007");
        assert_eq!(mech.garage.map(|g| g.gid), Some("G001".to_string()));
        assert_eq!(view.owner.map(|o| o.cid), Some("C001".to_string()));
        assert_eq!(view.make, "Toyota");
        assert_eq!(
            repo.calls(),
            vec!["vehicle.find_by_reg:SGX1", "mechanic.find_by_mid:M007", "vehicle.save:SGX1"]
        );
    }

    #[tokio::test]
    async fn reassign_forbidden_field_fails_before_lookups() {
        let (repo, svc) = setup();
        let err = svc.reassign_mechanic("SGX1", &payload(json!({"mid": "M1", "name": "new"}))).await.unwrap_err();
        assert_eq!(err.to_string(), "name attribute should not be provided in the request");
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn reassign_missing_vehicle_skips_mechanic_lookup() {
        let (repo, svc) = setup();
        repo.add_mechanic("M007", "Sean", 1.0, None);
        let err = svc.reassign_mechanic("NOPE", &payload(json!({"mid": "M007"}))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Vehicle NOPE doesn't exist");
        assert_eq!(repo.calls(), vec!["vehicle.find_by_reg:NOPE"]);
    }

    #[tokio::test]
    async fn reassign_missing_mechanic_is_not_found() {
        let (repo, svc) = setup();
        repo.add_vehicle("SGX1", "Toyota", "Corolla", None, None);
        let err = svc.reassign_mechanic("SGX1", &payload(json!({"mid": "M999"}))).await.unwrap_err();
        assert_eq!(err.to_string(), "Mechanic M999 doesn't exist");
        assert!(!repo.calls().iter().any(|c| c.starts_with("vehicle.save")));
    }

    #[tokio::test]
    async fn list_by_make_is_case_sensitive_and_raw_keeps_ids() {
        let (repo, svc) = setup();
        let c = repo.add_customer("C001", "Alan", "091-555");
        repo.add_vehicle("A1", "Toyota", "Yaris", Some(&c), None);
        repo.add_vehicle("A2", "Ford", "Focus", None, None);

        assert_eq!(svc.list_by_make("Toyota").await.unwrap().len(), 1);
        assert!(svc.list_by_make("toyota").await.unwrap().is_empty());

        let raw = svc.list_raw().await.unwrap();
        assert!(raw.iter().all(|v| v.id.is_some()));
        assert_eq!(raw[0].owner.as_ref().map(|o| o.phone.as_str()), Some("091-555"));
    }
}
