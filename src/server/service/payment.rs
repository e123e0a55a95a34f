//! Payment intent creation through the external payment processor.

use serde::Deserialize;

use crate::server::error::AppError;

const DEFAULT_CURRENCY: &str = "usd";

#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    api_url: String,
    secret_key: String,
}

#[derive(Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

#[derive(Deserialize)]
struct ProcessorErrorResponse {
    error: ProcessorError,
}

#[derive(Deserialize)]
struct ProcessorError {
    message: Option<String>,
}

impl PaymentClient {
    pub fn new(http: reqwest::Client, api_url: String, secret_key: String) -> Self {
        Self {
            http,
            api_url,
            secret_key,
        }
    }

    /// Creates a card payment intent and returns its client secret.
    ///
    /// # Arguments
    /// - `amount` - Amount in major currency units
    /// - `currency` - ISO currency code, `usd` when absent
    ///
    /// # Returns
    /// - `Ok(String)` - Client secret the browser uses to confirm the payment
    /// - `Err(AppError::BadRequest)` - Amount or currency invalid
    /// - `Err(AppError::PaymentErr)` - Processor rejected the request
    /// - `Err(AppError::ReqwestErr)` - Processor unreachable or response unreadable
    pub async fn create_intent(
        &self,
        amount: f64,
        currency: Option<&str>,
    ) -> Result<String, AppError> {
        let minor_units = to_minor_units(amount)?;
        let currency = normalize_currency(currency)?;

        let response = self
            .http
            .post(format!(
                "{}/v1/payment_intents",
                self.api_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.secret_key)
            .form(&[
                ("amount", minor_units.to_string()),
                ("currency", currency),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProcessorErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("processor answered {}", status));

            return Err(AppError::PaymentErr(message));
        }

        let intent: PaymentIntentResponse = response.json().await?;

        Ok(intent.client_secret)
    }
}

/// Converts a major-unit amount to the processor's integer minor units.
///
/// # Returns
/// - `Ok(u64)` - `round(amount * 100)`, at least one minor unit
/// - `Err(AppError::BadRequest)` - Amount not positive or not finite
pub fn to_minor_units(amount: f64) -> Result<u64, AppError> {
    let minor = (amount * 100.0).round();

    if !amount.is_finite() || minor < 1.0 || minor > u64::MAX as f64 {
        return Err(AppError::BadRequest(format!(
            "Amount must be a positive number, got {}",
            amount
        )));
    }

    Ok(minor as u64)
}

fn normalize_currency(currency: Option<&str>) -> Result<String, AppError> {
    let currency = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_ascii_lowercase();

    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported currency '{}'",
            currency
        )));
    }

    Ok(currency)
}
