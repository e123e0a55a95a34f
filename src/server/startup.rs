use std::time::Duration;

use crate::server::{
    config::Config,
    error::AppError,
    service::{identity::IdentityClient, payment::PaymentClient},
};

/// Timeout for calls to the identity provider and payment processor.
const EXTERNAL_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations. Acquiring a pooled connection
/// is bounded by the configured store timeout so an exhausted pool surfaces as an
/// unavailable store instead of a hung request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .acquire_timeout(config.query.store_timeout);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by the external service clients.
///
/// Redirects are never followed.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialise
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(EXTERNAL_REQUEST_TIMEOUT)
        .build()?)
}

pub fn setup_identity_client(config: &Config, http: reqwest::Client) -> IdentityClient {
    IdentityClient::new(
        http,
        config.identity_lookup_url.clone(),
        config.identity_api_key.clone(),
    )
}

pub fn setup_payment_client(config: &Config, http: reqwest::Client) -> PaymentClient {
    PaymentClient::new(
        http,
        config.payment_api_url.clone(),
        config.payment_secret_key.clone(),
    )
}
