//! SeaORM entities for the garage schema plus connection and seeding helpers.

pub mod errors;
pub mod db;
pub mod customer;
pub mod garage;
pub mod mechanic;
pub mod vehicle;
pub mod seed;

#[cfg(test)]
mod tests;
