use std::sync::Arc;

use tracing::{info, instrument};

use super::repository::MechanicRepository;
use crate::errors::ServiceError;

/// Mechanic operations. Mechanics are only ever removed through the guarded delete.
pub struct MechanicService<M: ?Sized = dyn MechanicRepository> {
    mechanics: Arc<M>,
}

impl<M: MechanicRepository + ?Sized> MechanicService<M> {
    pub fn new(mechanics: Arc<M>) -> Self { Self { mechanics } }

    /// Delete the mechanic `mid` unless a vehicle still points at them.
    ///
    /// # Examples
    /// ```
    /// use service::garage::{MechanicService, repository::mock::InMemoryGarageRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryGarageRepository::new());
    /// repo.add_mechanic("M007", "Sean Quinn", 48000.0, None);
    /// let svc = MechanicService::new(repo);
    /// tokio_test::block_on(svc.delete("M007")).unwrap();
    /// let again = tokio_test::block_on(svc.delete("M007")).unwrap_err();
    /// assert_eq!(again.to_string(), "Mechanic with mid M007 doesn't exist");
    /// ```
    #[instrument(skip(self))]
    pub async fn delete(&self, mid: &str) -> Result<(), ServiceError> {
        let mechanic = self
            .mechanics
            .find_by_mid(mid)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Mechanic with mid {mid} doesn't exist")))?;

        let serviced = self.mechanics.serviced_vehicles(&mechanic).await?;
        if !serviced.is_empty() {
            info!(mid, vehicles = serviced.len(), "mechanic_delete_refused");
            return Err(ServiceError::Conflict(format!(
                "Cannot delete mechanic {mid} because they are servicing vehicles"
            )));
        }

        self.mechanics.delete(&mechanic).await?;
        info!(mid, "mechanic_deleted");
        Ok(())
    }
}
