use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        payment::{PaymentIntentDto, PaymentIntentRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::identity::Principal,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Create a payment intent for an application fee.
///
/// # Access Control
/// - Any registered user
///
/// # Arguments
/// - `state` - Application state containing the payment client
/// - `principal` - Verified caller
/// - `payload` - Amount in major units and optional currency (default `usd`)
///
/// # Returns
/// - `200 OK` - Client secret for confirming the payment in the browser
/// - `400 Bad Request` - Amount not positive or currency invalid
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller has no account
/// - `502 Bad Gateway` - Payment processor rejected the request
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = PAYMENT_TAG,
    request_body = PaymentIntentRequestDto,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentDto),
        (status = 400, description = "Invalid amount or currency", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller has no account", body = ErrorDto),
        (status = 502, description = "Payment processor rejected the request", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<PaymentIntentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &principal).require(&[]).await?;

    let client_secret = state
        .payment
        .create_intent(payload.amount, payload.currency.as_deref())
        .await?;

    tracing::info!("Created payment intent for {}", user.email);

    Ok((StatusCode::OK, Json(PaymentIntentDto { client_secret })))
}
