//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! collection. Repositories use SeaORM entity models internally and return domain models
//! to maintain separation between the data layer and business logic layer.

pub mod application;
pub mod review;
pub mod scholarship;
pub mod user;

#[cfg(test)]
mod test;
