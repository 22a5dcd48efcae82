//! Garage domain: vehicles, their owners, the mechanics servicing them and the
//! garages those mechanics work in.
//!
//! Layers: `domain` (types), `repository` (Entity Store ports + in-memory
//! store), `repo` (SeaORM store), `projection` (acyclic transfer view),
//! `rules` (payload checks) and the two operation services.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod projection;
pub mod rules;
pub mod vehicle_service;
pub mod mechanic_service;

pub use mechanic_service::MechanicService;
pub use projection::VehicleView;
pub use vehicle_service::VehicleService;
