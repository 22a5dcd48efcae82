//! Service layer for the garage API.
//! - Domain types and the Entity Store ports live in `garage`.
//! - Business rules run here, independent of the HTTP framework.
//! - Persistence goes through `models` (SeaORM) or the in-memory store.

pub mod errors;
pub mod garage;
#[cfg(test)]
pub mod test_support;
