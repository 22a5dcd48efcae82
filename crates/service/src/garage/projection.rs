//! Acyclic transfer view of a vehicle.
//!
//! The only place where the vehicle/customer/mechanic/garage graph is
//! flattened for callers. Missing associations are omitted from the JSON
//! output rather than written as `null`.

use serde::{Deserialize, Serialize};

use super::domain::{Customer, Garage, Mechanic, Vehicle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleView {
    pub reg: String,
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanic: Option<MechanicView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerView {
    pub cid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicView {
    pub mid: String,
    pub name: String,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garage: Option<GarageView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageView {
    pub gid: String,
    pub location: String,
    pub budget: i32,
}

impl From<&Vehicle> for VehicleView {
    fn from(v: &Vehicle) -> Self {
        Self {
            reg: v.reg.clone(),
            make: v.make.clone(),
            model: v.model.clone(),
            owner: v.owner.as_ref().map(OwnerView::from),
            mechanic: v.mechanic.as_ref().map(MechanicView::from),
        }
    }
}

impl From<&Customer> for OwnerView {
    fn from(c: &Customer) -> Self {
        Self { cid: c.cid.clone(), name: c.name.clone() }
    }
}

impl From<&Mechanic> for MechanicView {
    fn from(m: &Mechanic) -> Self {
        Self {
            mid: m.mid.clone(),
            name: m.name.clone(),
            salary: m.salary,
            garage: m.garage.as_ref().map(GarageView::from),
        }
    }
}

impl From<&Garage> for GarageView {
    fn from(g: &Garage) -> Self {
        Self { gid: g.gid.clone(), location: g.location.clone(), budget: g.budget }
    }
}
