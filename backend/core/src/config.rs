//! Environment-driven configuration.
//!
//! All values are read once at startup into an immutable struct. The
//! map-injected constructor exists so tests never touch process env vars.

use std::collections::HashMap;
use std::fmt;

use crate::error::BridgeError;

/// Optional: PR body text; fetched from GitHub when absent.
pub const ENV_PR_DESCRIPTION: &str = "PR_DESCRIPTION";
/// Required: pull request number.
pub const ENV_PR_NUMBER: &str = "PR_NUMBER";
/// Required: repository in `owner/name` form.
pub const ENV_REPO_FULL_NAME: &str = "REPO_FULL_NAME";
/// Required: Jules API key (sent as `X-Goog-Api-Key`).
pub const ENV_JULES_API_KEY: &str = "JULES_API_KEY";
/// Required: GitHub token (sent as `Authorization: token …`).
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// All required variables, in reporting order.
pub const REQUIRED_VARS: [&str; 4] = [
    ENV_PR_NUMBER,
    ENV_REPO_FULL_NAME,
    ENV_JULES_API_KEY,
    ENV_GITHUB_TOKEN,
];

/// Notifier configuration, loaded once at startup.
#[derive(Clone)]
pub struct BridgeConfig {
    /// PR body text if the CI environment supplied it.
    pub pr_description: Option<String>,
    pub pr_number: String,
    pub repo_full_name: String,
    pub jules_api_key: String,
    pub github_token: String,
}

impl BridgeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, BridgeError> {
        Self::from_env_map(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    ///
    /// Empty strings count as missing. The error lists every absent
    /// required variable, not just the first.
    pub fn from_env_map(env: &HashMap<String, String>) -> Result<Self, BridgeError> {
        let get = |name: &str| {
            env.get(name)
                .map(String::as_str)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(BridgeError::Config(missing.join(", ")));
        }

        Ok(Self {
            pr_description: get(ENV_PR_DESCRIPTION),
            pr_number: get(ENV_PR_NUMBER).unwrap_or_default(),
            repo_full_name: get(ENV_REPO_FULL_NAME).unwrap_or_default(),
            jules_api_key: get(ENV_JULES_API_KEY).unwrap_or_default(),
            github_token: get(ENV_GITHUB_TOKEN).unwrap_or_default(),
        })
    }
}

// Manual Debug so secrets never reach logs.
impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("pr_description", &self.pr_description)
            .field("pr_number", &self.pr_number)
            .field("repo_full_name", &self.repo_full_name)
            .field("jules_api_key", &"***")
            .field("github_token", &"***")
            .finish()
    }
}
