//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod application;
pub mod rating;
pub mod review;
pub mod scholarship;
pub mod search;
pub mod user;

use serde_json::{Map, Value};

/// Unwraps a stored JSON column into an object, treating anything else as empty.
pub(crate) fn json_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
