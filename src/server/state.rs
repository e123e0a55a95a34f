//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Identity provider client used to verify bearer tokens
//! - Payment processor client used to create payment intents
//! - Query limits for the search and rating paths

use sea_orm::DatabaseConnection;

use crate::server::{
    config::QuerySettings,
    service::{identity::IdentityClient, payment::PaymentClient},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - Both external clients wrap a `reqwest::Client`, which uses an `Arc` internally
/// - `QuerySettings` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for verifying bearer tokens with the identity provider.
    pub identity: IdentityClient,

    /// Client for creating payment intents with the payment processor.
    pub payment: PaymentClient,

    /// Store timeout and rating fan-out width.
    pub query: QuerySettings,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `identity` - Identity provider client
    /// - `payment` - Payment processor client
    /// - `query` - Limits for search and rating reads
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        identity: IdentityClient,
        payment: PaymentClient,
        query: QuerySettings,
    ) -> Self {
        Self {
            db,
            identity,
            payment,
            query,
        }
    }
}
