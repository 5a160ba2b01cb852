//! HTTP helpers shared by the country-data and identity clients.
//!
//! Every failure is folded into [`AppError`]: transport errors and non-2xx
//! statuses become `Network`, a 404 becomes `NotFound`.

use contracts::shared::error::{AppError, AppResult};
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::shared::config::config;
use crate::system::auth::storage;

/// Base URL of the country-data API, without trailing slash.
pub fn countries_base() -> String {
    config().api.countries_url.trim_end_matches('/').to_string()
}

/// Base URL of the identity provider, without trailing slash.
pub fn identity_base() -> String {
    config().api.identity_url.trim_end_matches('/').to_string()
}

/// Attaches `Authorization: Bearer <token>` when a token is stored.
pub fn with_bearer(request: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Send a prepared request and decode a JSON body.
pub async fn send_json<T>(request: RequestBuilder, what: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let response = request
        .send()
        .await
        .map_err(|e| AppError::network(format!("Failed to fetch {}: {}", what, e)))?;
    decode(response, what).await
}

pub async fn decode<T>(response: Response, what: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    check_status(&response, what)?;
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::network(format!("Failed to parse {}: {}", what, e)))
}

pub fn check_status(response: &Response, what: &str) -> AppResult<()> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    log::warn!("{} answered {} {}", what, status, response.status_text());
    if status == 404 {
        Err(AppError::NotFound(format!("No {} found", what)))
    } else {
        Err(AppError::network(format!(
            "Failed to fetch {}: {}",
            what, status
        )))
    }
}
