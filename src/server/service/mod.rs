//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They implement the business rules, coordinate repository calls and external
//! collaborators, and work with domain models rather than DTOs or entities.
//!
//! - `rating` / `scholarship` - Rating aggregation and the enriched scholarship search
//! - `review` / `user` / `application` - Persistence-backed workflows
//! - `identity` / `payment` - Clients for the identity provider and payment processor

pub mod application;
pub mod identity;
pub mod payment;
pub mod rating;
pub mod review;
pub mod scholarship;
pub mod user;

#[cfg(test)]
mod test;
