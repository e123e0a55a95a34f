//! Request authentication and authorization.
//!
//! `Principal` is extracted from the bearer token on each request; `AuthGuard`
//! resolves it to a stored user and checks role and ownership requirements.

pub mod auth;

#[cfg(test)]
mod test;
