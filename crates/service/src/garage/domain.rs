use serde::Serialize;

/// Loosely typed inbound body. Keeps "key present" apart from "key absent".
pub type Payload = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: i32,
    pub cid: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Garage {
    pub id: i32,
    pub gid: String,
    pub location: String,
    pub budget: i32,
}

/// A mechanic and the garage employing them, if any.
/// Serviced vehicles are not held here; the store answers that by query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mechanic {
    pub id: i32,
    pub mid: String,
    pub name: String,
    pub salary: f64,
    pub garage: Option<Garage>,
}

/// A vehicle with its owning references resolved.
/// `id` is `None` until the store has persisted it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: Option<i32>,
    pub reg: String,
    pub make: String,
    pub model: String,
    pub owner: Option<Customer>,
    pub mechanic: Option<Mechanic>,
}

/// Fields accepted when registering a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub reg: String,
    pub make: String,
    pub model: String,
}

impl From<NewVehicle> for Vehicle {
    fn from(v: NewVehicle) -> Self {
        Self { id: None, reg: v.reg, make: v.make, model: v.model, owner: None, mechanic: None }
    }
}

impl From<models::customer::Model> for Customer {
    fn from(c: models::customer::Model) -> Self {
        Self { id: c.id, cid: c.cid, name: c.name, phone: c.phone }
    }
}

impl From<models::garage::Model> for Garage {
    fn from(g: models::garage::Model) -> Self {
        Self { id: g.id, gid: g.gid, location: g.location, budget: g.budget }
    }
}

impl From<(models::mechanic::Model, Option<models::garage::Model>)> for Mechanic {
    fn from((m, g): (models::mechanic::Model, Option<models::garage::Model>)) -> Self {
        Self { id: m.id, mid: m.mid, name: m.name, salary: m.salary, garage: g.map(Garage::from) }
    }
}
