//! HTTP request handlers.
//!
//! Controllers authenticate the caller, check permissions through `AuthGuard`,
//! convert DTOs into domain parameters, call the service layer and convert the
//! result back into DTOs.

pub mod application;
pub mod health;
pub mod payment;
pub mod review;
pub mod scholarship;
pub mod user;
