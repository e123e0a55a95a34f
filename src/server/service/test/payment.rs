use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Form, Json, Router,
};
use serde_json::json;
use std::collections::HashMap;

use super::spawn_stub;
use crate::server::{error::AppError, service::payment::PaymentClient};

/// Processor stub that requires the secret `sk_test` and declines amounts over 100000.
fn processor_router() -> Router {
    Router::new().route(
        "/v1/payment_intents",
        post(
            |headers: HeaderMap, Form(form): Form<HashMap<String, String>>| async move {
                let authorized = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    == Some("Bearer sk_test");
                if !authorized {
                    return (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "error": { "message": "Invalid API Key provided" } })),
                    );
                }

                let amount: u64 = form
                    .get("amount")
                    .and_then(|a| a.parse().ok())
                    .unwrap_or_default();
                if amount > 100_000 {
                    return (
                        StatusCode::PAYMENT_REQUIRED,
                        Json(json!({ "error": { "message": "Your card was declined." } })),
                    );
                }

                let currency = form.get("currency").cloned().unwrap_or_default();
                let method = form.get("payment_method_types[]").cloned().unwrap_or_default();
                (
                    StatusCode::OK,
                    Json(json!({
                        "client_secret": format!("pi_{}_{}_{}_secret", amount, currency, method)
                    })),
                )
            },
        ),
    )
}

async fn client(secret: &str) -> PaymentClient {
    let base = spawn_stub(processor_router()).await;

    PaymentClient::new(reqwest::Client::new(), base, secret.to_string())
}

/// Tests creating an intent with the default currency.
///
/// Expected: client secret echoing 1250 minor units in usd for card payments
#[tokio::test]
async fn creates_intent_in_minor_units() -> Result<(), AppError> {
    let secret = client("sk_test").await.create_intent(12.5, None).await?;

    assert_eq!(secret, "pi_1250_usd_card_secret");

    Ok(())
}

/// Tests a declined payment.
///
/// Expected: Err(AppError::PaymentErr) carrying the processor's message
#[tokio::test]
async fn declined_payment_maps_to_payment_error() {
    let result = client("sk_test")
        .await
        .create_intent(5_000.0, Some("EUR"))
        .await;

    match result {
        Err(AppError::PaymentErr(message)) => assert_eq!(message, "Your card was declined."),
        other => panic!("expected payment error, got {:?}", other),
    }
}

/// Tests that an invalid amount never reaches the processor.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn invalid_amount_is_bad_request() {
    let result = client("sk_wrong").await.create_intent(-1.0, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
