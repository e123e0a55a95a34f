//! Bearer token verification against the external identity provider.
//!
//! The provider's account lookup endpoint receives the ID token and answers with the
//! account it belongs to. Only the email is used; authorization decisions are made
//! locally from the user record keyed by that email.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Identity proven by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub email: String,
}

#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    lookup_url: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
struct LookupUser {
    email: Option<String>,
}

impl IdentityClient {
    pub fn new(http: reqwest::Client, lookup_url: String, api_key: String) -> Self {
        Self {
            http,
            lookup_url,
            api_key,
        }
    }

    /// Verifies a bearer token and resolves the email it was issued for.
    ///
    /// # Arguments
    /// - `token` - Raw ID token taken from the `Authorization` header
    ///
    /// # Returns
    /// - `Ok(Principal)` - Token accepted, email resolved
    /// - `Err(AuthError::InvalidToken)` - Provider rejected the token or it carries no email
    /// - `Err(AppError::InternalError)` - Provider answered with an unexpected status
    /// - `Err(AppError::ReqwestErr)` - Provider unreachable or response unreadable
    pub async fn verify(&self, token: &str) -> Result<Principal, AppError> {
        let response = self
            .http
            .post(&self.lookup_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&LookupRequest { id_token: token })
            .send()
            .await?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(AuthError::InvalidToken(format!("provider answered {}", status)).into());
        }
        if !status.is_success() {
            return Err(AppError::InternalError(format!(
                "Identity provider returned unexpected status {}",
                status
            )));
        }

        let body: LookupResponse = response.json().await?;

        let email = body
            .users
            .into_iter()
            .find_map(|user| user.email)
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty())
            .ok_or_else(|| AuthError::InvalidToken("token carries no email".to_string()))?;

        Ok(Principal { email })
    }
}
