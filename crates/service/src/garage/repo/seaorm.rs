use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};

use models::{customer, garage, mechanic, vehicle};

use crate::errors::ServiceError;
use crate::garage::domain::{Customer, Mechanic, Vehicle};
use crate::garage::repository::{MechanicRepository, VehicleRepository};

/// Entity Store over the SeaORM garage schema.
///
/// Vehicles are stored with foreign keys only; reads hydrate owner, mechanic
/// and the mechanic's garage with one batched lookup per table.
#[derive(Clone)]
pub struct SeaOrmGarageRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmGarageRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn hydrate(&self, rows: Vec<vehicle::Model>) -> Result<Vec<Vehicle>, ServiceError> {
        let owner_ids: Vec<i32> = rows.iter().filter_map(|v| v.owner_id).collect();
        let mechanic_ids: Vec<i32> = rows.iter().filter_map(|v| v.mechanic_id).collect();

        let owners: HashMap<i32, Customer> = if owner_ids.is_empty() {
            HashMap::new()
        } else {
            customer::Entity::find()
                .filter(customer::Column::Id.is_in(owner_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, Customer::from(c)))
                .collect()
        };

        let mechanics: HashMap<i32, Mechanic> = if mechanic_ids.is_empty() {
            HashMap::new()
        } else {
            mechanic::Entity::find()
                .filter(mechanic::Column::Id.is_in(mechanic_ids))
                .find_also_related(garage::Entity)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|pair| (pair.0.id, Mechanic::from(pair)))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|v| Vehicle {
                id: Some(v.id),
                owner: v.owner_id.and_then(|id| owners.get(&id).cloned()),
                mechanic: v.mechanic_id.and_then(|id| mechanics.get(&id).cloned()),
                reg: v.reg,
                make: v.make,
                model: v.model,
            })
            .collect())
    }

    async fn hydrate_one(&self, row: vehicle::Model) -> Result<Vehicle, ServiceError> {
        let id = row.id;
        self.hydrate(vec![row])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::Store(format!("vehicle row {id} vanished during hydration")))
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmGarageRepository {
    async fn list_all(&self) -> Result<Vec<Vehicle>, ServiceError> {
        let rows = vehicle::Entity::find().order_by_asc(vehicle::Column::Id).all(&self.db).await?;
        self.hydrate(rows).await
    }

    async fn list_by_make(&self, make: &str) -> Result<Vec<Vehicle>, ServiceError> {
        let rows = vehicle::Entity::find()
            .filter(vehicle::Column::Make.eq(make))
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await?;
        self.hydrate(rows).await
    }

    async fn find_by_reg(&self, reg: &str) -> Result<Option<Vehicle>, ServiceError> {
        match vehicle::Entity::find().filter(vehicle::Column::Reg.eq(reg)).one(&self.db).await? {
            Some(row) => Ok(Some(self.hydrate_one(row).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, v: &Vehicle) -> Result<Vehicle, ServiceError> {
        let mechanic_id = v.mechanic.as_ref().map(|m| m.id);
        let row = match v.id {
            None => {
                vehicle::ActiveModel {
                    reg: Set(v.reg.clone()),
                    make: Set(v.make.clone()),
                    model: Set(v.model.clone()),
                    owner_id: Set(v.owner.as_ref().map(|c| c.id)),
                    mechanic_id: Set(mechanic_id),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?
            }
            Some(id) => {
                vehicle::ActiveModel {
                    id: Unchanged(id),
                    mechanic_id: Set(mechanic_id),
                    ..Default::default()
                }
                .update(&self.db)
                .await?
            }
        };
        self.hydrate_one(row).await
    }
}

#[async_trait]
impl MechanicRepository for SeaOrmGarageRepository {
    async fn find_by_mid(&self, mid: &str) -> Result<Option<Mechanic>, ServiceError> {
        let found = mechanic::Entity::find()
            .filter(mechanic::Column::Mid.eq(mid))
            .find_also_related(garage::Entity)
            .one(&self.db)
            .await?;
        Ok(found.map(Mechanic::from))
    }

    async fn serviced_vehicles(&self, m: &Mechanic) -> Result<Vec<String>, ServiceError> {
        let rows = vehicle::Entity::find()
            .filter(vehicle::Column::MechanicId.eq(m.id))
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|v| v.reg).collect())
    }

    async fn delete(&self, m: &Mechanic) -> Result<(), ServiceError> {
        mechanic::Entity::delete_by_id(m.id).exec(&self.db).await?;
        Ok(())
    }
}
