use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No usable `Authorization: Bearer <token>` header on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing or malformed bearer token")]
    MissingToken,

    /// The identity provider rejected the token or returned no email for it.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Identity provider rejected the bearer token: {0}")]
    InvalidToken(String),

    /// The token is valid but no user record exists for its email.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(String),

    /// The user lacks the role or ownership required for the operation.
    ///
    /// # Fields
    /// - Email of the user that was denied
    /// - Reason for the denial, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing or rejected tokens
/// - 403 Forbidden - For unknown users and insufficient permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized access".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) | Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden access".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
