//! Wire DTOs shared by the HTTP layer.
//!
//! Every type here is serialized with camelCase field names, matching the
//! document shapes the web client already sends and reads.

pub mod api;
pub mod application;
pub mod payment;
pub mod review;
pub mod scholarship;
pub mod user;
