use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP client for the identity provider REST API.
/// The bearer token it issues is opaque and never parsed.
pub struct ProviderClient {
    pub base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

/// Fresh account from signup
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub uid: String,
    pub token: String,
}

/// Authenticated credential from login
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub uid: String,
    pub email: String,
    pub token: String,
}

/// Currently signed-in principal for a token
#[derive(Debug, Deserialize)]
pub struct Principal {
    pub uid: String,
    pub email: String,
}

impl ProviderClient {
    /// Create a new provider client. An empty api_key is not sent.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_client(base_url, api_key, ReqwestClient::new())
    }

    /// Create a client reusing a pre-configured reqwest client.
    pub fn with_client(base_url: &str, api_key: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: (!api_key.is_empty()).then(|| api_key.to_string()),
            client,
        }
    }

    /// Build a request with the optional provider API key header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("provider request: {method} {url}");
        let mut req = self.client.request(method, &url);

        if let Some(ref key) = self.api_key {
            req = req.header("X-Api-Key", key);
        }

        req
    }

    /// Send a request and return status plus parsed body (Null when empty)
    async fn send(&self, req: reqwest::RequestBuilder) -> AuthErrorResult<(StatusCode, Value)> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| AuthError::decode(format!("invalid JSON body: {e}")))?
        };

        Ok((status, body))
    }

    /// Extract `{"error": {"code", "message"}}` from a failure body
    fn provider_error(body: &Value) -> AuthError {
        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        AuthError::Provider {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a provider account
    pub async fn signup(&self, email: &str, password: &str) -> AuthErrorResult<SignupResponse> {
        #[derive(Serialize)]
        struct SignupRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/v1/signup")
            .json(&SignupRequest { email, password });
        let (status, body) = self.send(req).await?;

        if !status.is_success() {
            return Err(Self::provider_error(&body));
        }

        serde_json::from_value(body).map_err(|e| AuthError::decode(format!("signup: {e}")))
    }

    /// Authenticate a credential
    pub async fn login(&self, email: &str, password: &str) -> AuthErrorResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/v1/login")
            .json(&LoginRequest { email, password });
        let (status, body) = self.send(req).await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::invalid_credentials());
        }
        if !status.is_success() {
            return Err(Self::provider_error(&body));
        }

        serde_json::from_value(body).map_err(|e| AuthError::decode(format!("login: {e}")))
    }

    /// Ask who a token belongs to. An invalid or expired token yields None.
    pub async fn session(&self, token: &str) -> AuthErrorResult<Option<Principal>> {
        let req = self.request(Method::GET, "/v1/session").bearer_auth(token);
        let (status, body) = self.send(req).await?;

        if status == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::provider_error(&body));
        }

        let principal = serde_json::from_value(body)
            .map_err(|e| AuthError::decode(format!("session: {e}")))?;
        Ok(Some(principal))
    }

    /// Invalidate a token
    pub async fn logout(&self, token: &str) -> AuthErrorResult<()> {
        let req = self.request(Method::POST, "/v1/logout").bearer_auth(token);
        let (status, body) = self.send(req).await?;

        if !status.is_success() {
            return Err(Self::provider_error(&body));
        }

        Ok(())
    }
}
