//! REST API client for the portal auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as [`ApiError`] and propagated untouched by the
//! session store; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, Mutex, PoisonError};

use super::types::{Credentials, TokenResponse, UserProfile};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "/auth/login";
pub const ME_PATH: &str = "/auth/me";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{endpoint} failed: {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Remote auth operations the session store depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;

    /// Fetch the profile of the user owning the current token.
    async fn me(&self) -> Result<UserProfile, ApiError>;

    /// Set or clear the default `Authorization` header for later calls.
    fn set_auth_token(&self, token: Option<&str>);
}

/// `gloo-net` backed API client.
///
/// Clones share the default auth header, so a token set through one handle
/// is sent by all of them.
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ApiConfig,
    token: Arc<Mutex<Option<String>>>,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config, token: Arc::new(Mutex::new(None)) }
    }

    /// Currently configured bearer token, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Value for the `Authorization` header, if a token is set.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.auth_token().map(|token| bearer_header(&token))
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(ApiConfig::from_env())
    }
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(LOGIN_PATH);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { endpoint: LOGIN_PATH, status: resp.status() });
            }
            resp.json::<TokenResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn me(&self) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(ME_PATH);
            let mut req = gloo_net::http::Request::get(&url);
            if let Some(header) = self.authorization_header() {
                req = req.header("Authorization", &header);
            }
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { endpoint: ME_PATH, status: resp.status() });
            }
            resp.json::<UserProfile>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    fn set_auth_token(&self, token: Option<&str>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token.map(str::to_owned);
    }
}
