//! HTTP client for the agenda backend API.

use agenda_core::Event;
use agenda_core::protocol::{
    CreateEventPayload, EventPayload, LoginRequest, LoginResponse, UserResponse,
};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;

/// Thin async client over the backend REST API. Each method is one
/// request; completion is delivered on the caller's executor.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let resp = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .context("Failed to reach the events backend")?;

        if !resp.status().is_success() {
            anyhow::bail!("Login failed: {}", error_message(resp).await);
        }

        let body: LoginResponse = resp.json().await.context("Malformed login response")?;
        Ok(body.token)
    }

    /// GET /users/me
    pub async fn me(&self, token: &str) -> Result<UserResponse> {
        let resp = self
            .http
            .get(format!("{}/users/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to reach the events backend")?;

        if !resp.status().is_success() {
            anyhow::bail!("Fetching profile failed: {}", error_message(resp).await);
        }

        Ok(resp.json().await.context("Malformed profile response")?)
    }

    /// GET /events
    ///
    /// Payloads missing coordinates are dropped here, before the events
    /// reach filtering or rendering.
    pub async fn list_events(&self, token: &str) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/events", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to reach the events backend")?;

        if !resp.status().is_success() {
            anyhow::bail!("Fetching events failed: {}", error_message(resp).await);
        }

        let payloads: Vec<EventPayload> =
            resp.json().await.context("Malformed events response")?;

        Ok(payloads
            .into_iter()
            .filter_map(EventPayload::into_event)
            .collect())
    }

    /// POST /events — backend replies 201 on success.
    pub async fn create_event(&self, token: &str, event: &CreateEventPayload) -> Result<()> {
        let resp = self
            .http
            .post(format!("{}/events", self.base_url))
            .bearer_auth(token)
            .json(event)
            .send()
            .await
            .context("Failed to reach the events backend")?;

        if resp.status() != StatusCode::CREATED {
            anyhow::bail!("Creating event failed: {}", error_message(resp).await);
        }

        Ok(())
    }
}

/// Pull the server's error message out of a failed response, falling back
/// to the status code.
async fn error_message(resp: reqwest::Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    }
}
