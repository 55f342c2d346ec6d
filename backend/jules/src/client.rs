//! Jules API client.
//!
//! Two read-only calls against the v1alpha sessions surface. The API key
//! rides as a default `X-Goog-Api-Key` header on every request.

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::activity::{Activity, ActivityList};
use crate::session::Session;

pub const DEFAULT_API_BASE: &str = "https://jules.googleapis.com/v1alpha";

pub struct JulesClient {
    http: Client,
    api_base: String,
}

impl JulesClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_key: &str, api_base: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key.trim())
            .context("invalid Jules API key header")?;
        key.set_sensitive(true);
        headers.insert("x-goog-api-key", key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create Jules client")?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /sessions/{id}` — session metadata, including the prompt.
    pub async fn get_session(&self, session_id: &str) -> Result<Session> {
        let url = format!("{}/sessions/{}", self.api_base, session_id);
        debug!("Fetching Jules session from {}", url);
        let session = self
            .http
            .get(&url)
            .send()
            .await
            .context("Jules session fetch failed")?
            .error_for_status()
            .context("Jules session fetch returned an error status")?
            .json::<Session>()
            .await
            .context("invalid Jules session response body")?;
        Ok(session)
    }

    /// `GET /sessions/{id}/activities` — the session's activity stream.
    pub async fn list_activities(&self, session_id: &str) -> Result<Vec<Activity>> {
        let url = format!("{}/sessions/{}/activities", self.api_base, session_id);
        debug!("Fetching Jules activities from {}", url);
        let list = self
            .http
            .get(&url)
            .send()
            .await
            .context("Jules activities fetch failed")?
            .error_for_status()
            .context("Jules activities fetch returned an error status")?
            .json::<ActivityList>()
            .await
            .context("invalid Jules activities response body")?;
        Ok(list.activities)
    }
}
