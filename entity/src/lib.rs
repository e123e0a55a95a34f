//! SeaORM entity definitions for the scholarship platform collections.

pub mod prelude;

pub mod application;
pub mod review;
pub mod scholarship;
pub mod user;
