//! Session reference extraction and session wire types.
//!
//! Jules PRs carry a `task [<id>]` marker in the description. A PR without
//! one is simply not an integration target, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Pattern matching the task marker Jules embeds in PR descriptions.
static SESSION_REF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"task \[(\d+)\]").unwrap());

/// Extract the session id from a PR description.
///
/// Takes the first match's digit capture. `None` means "not a Jules PR".
pub fn extract_session_id(description: &str) -> Option<String> {
    SESSION_REF_PATTERN
        .captures(description)
        .map(|caps| caps[1].to_string())
}

/// Session resource, reduced to the field we consume.
#[derive(Deserialize, Debug)]
pub struct Session {
    /// The originating prompt. Absent in some responses.
    #[serde(default)]
    pub prompt: Option<String>,
}
