use async_trait::async_trait;
use contracts::shared::error::{AppError, AppResult};
use contracts::system::auth::{SignInRequest, SignInResponse, UpdateMetadataRequest, UserProfile};
use contracts::system::favorites::ProfileClient;
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::{check_status, decode, identity_base, send_json, with_bearer};

/// Sign in with username and password
pub async fn sign_in(username: String, password: String) -> AppResult<SignInResponse> {
    let request = SignInRequest { username, password };

    let response = Request::post(&format!("{}/sign-in", identity_base()))
        .json(&request)
        .map_err(|e| AppError::network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::network(format!("Failed to send request: {}", e)))?;

    decode(response, "session").await
}

/// Get the signed-in user's profile
pub async fn current_user() -> AppResult<UserProfile> {
    send_json(with_bearer(Request::get(&format!("{}/me", identity_base()))), "profile").await
}

/// Sign out (revoke the session at the provider)
pub async fn sign_out() -> AppResult<()> {
    let response = with_bearer(Request::post(&format!("{}/sign-out", identity_base())))
        .send()
        .await
        .map_err(|e| AppError::network(format!("Failed to send request: {}", e)))?;

    check_status(&response, "session")
}

/// Profile writes against the identity provider, authenticated with the
/// stored token.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProfileClient;

#[async_trait(?Send)]
impl ProfileClient for HttpProfileClient {
    async fn update_metadata(&self, metadata: Value) -> AppResult<UserProfile> {
        let body = UpdateMetadataRequest {
            unsafe_metadata: metadata,
        };

        let response = with_bearer(Request::patch(&format!("{}/me/metadata", identity_base())))
            .json(&body)
            .map_err(|e| AppError::network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::network(format!("Failed to send request: {}", e)))?;

        if response.status() == 401 {
            return Err(AppError::Unauthenticated);
        }
        decode(response, "profile").await
    }
}
