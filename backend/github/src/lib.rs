//! GitHub REST client.
//!
//! Two calls only: fetch a pull request (for its description) and post an
//! issue comment on it. Auth and accept headers are installed as client
//! defaults at construction; every response goes through
//! `error_for_status()` so a non-2xx is an error at the call site.

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Pull request resource, reduced to the field we consume.
#[derive(Deserialize, Debug)]
pub struct PullRequest {
    /// The PR description. Null on GitHub when the author left it empty.
    pub body: Option<String>,
}

#[derive(Serialize)]
struct NewComment<'a> {
    body: &'a str,
}

pub struct GitHubClient {
    http: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    pub fn with_api_base(token: &str, api_base: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("julesbridge"));
        let mut auth = HeaderValue::from_str(&format!("token {}", token.trim()))
            .context("invalid GitHub authorization header")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create GitHub client")?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /repos/{repo}/pulls/{number}`.
    pub async fn fetch_pull_request(&self, repo: &str, number: &str) -> Result<PullRequest> {
        let url = format!("{}/repos/{}/pulls/{}", self.api_base, repo, number);
        let pr = self
            .http
            .get(&url)
            .send()
            .await
            .context("GitHub pull request fetch failed")?
            .error_for_status()
            .context("GitHub pull request fetch returned an error status")?
            .json::<PullRequest>()
            .await
            .context("invalid pull request response body")?;
        Ok(pr)
    }

    /// `POST /repos/{repo}/issues/{number}/comments` with `{"body": …}`.
    pub async fn post_issue_comment(&self, repo: &str, number: &str, body: &str) -> Result<()> {
        let url = format!("{}/repos/{}/issues/{}/comments", self.api_base, repo, number);
        self.http
            .post(&url)
            .json(&NewComment { body })
            .send()
            .await
            .context("GitHub comment post failed")?
            .error_for_status()
            .context("GitHub comment post returned an error status")?;
        info!("Posted comment on {}#{}", repo, number);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_payload_shape() {
        let json = serde_json::to_value(NewComment { body: "hello" }).unwrap();
        assert_eq!(json, serde_json::json!({ "body": "hello" }));
    }

    #[test]
    fn pull_request_body_may_be_null() {
        let pr: PullRequest = serde_json::from_str(r#"{"body": null, "number": 7}"#).unwrap();
        assert!(pr.body.is_none());
    }

    #[test]
    fn api_base_trailing_slash_is_trimmed() {
        let client = GitHubClient::with_api_base("t0ken", "https://ghe.local/api/v3/").unwrap();
        assert_eq!(client.api_base, "https://ghe.local/api/v3");
    }
}
