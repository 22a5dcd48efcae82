//! Entity Store implementations backed by a real database.

pub mod seaorm;

pub use seaorm::SeaOrmGarageRepository;
