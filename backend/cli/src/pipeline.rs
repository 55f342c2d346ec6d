//! The notifier pipeline.
//!
//! Strictly ordered, single pass: description → session reference →
//! session metadata → activities → rendering → posted comment. Two early
//! exits (missing config, no task marker), no retries; every upstream call
//! happens exactly once.

use std::path::Path;

use tracing::{info, warn};

use julesbridge_core::{BridgeConfig, BridgeError, Outcome};
use julesbridge_github::GitHubClient;
use julesbridge_jules::{JulesClient, extract_session_id, latest_media};
use julesbridge_media::{compose_comment, render_media};

pub async fn run() -> Result<Outcome, BridgeError> {
    let config = BridgeConfig::from_env()?;
    let github = GitHubClient::new(&config.github_token)?;

    // PR description: from the CI env when present, otherwise from GitHub.
    let description = match config.pr_description.as_deref() {
        Some(body) if !body.is_empty() => body.to_string(),
        _ => {
            info!("PR description not found in env, fetching from GitHub...");
            github
                .fetch_pull_request(&config.repo_full_name, &config.pr_number)
                .await
                .map_err(|e| BridgeError::upstream("fetching pull request details", e))?
                .body
                .unwrap_or_default()
        }
    };

    // No task marker means this PR is simply not ours.
    let Some(session_id) = extract_session_id(&description) else {
        info!("Not a Jules PR (no task ID found in description).");
        return Ok(Outcome::NotATarget);
    };
    info!("Found Jules session ID: {}", session_id);

    let jules = JulesClient::new(&config.jules_api_key)?;

    let session = jules
        .get_session(&session_id)
        .await
        .map_err(|e| BridgeError::upstream("fetching session details", e))?;
    let prompt = session
        .prompt
        .unwrap_or_else(|| "No prompt found".to_string());

    // An activities failure degrades the comment; it never aborts the run.
    let media = match jules.list_activities(&session_id).await {
        Ok(activities) => latest_media(activities),
        Err(err) => {
            warn!("Error fetching activities: {:#}", err);
            None
        }
    };

    let media_section = render_media(media.as_ref(), Path::new("."));
    let body = compose_comment(&prompt, &media_section);

    github
        .post_issue_comment(&config.repo_full_name, &config.pr_number, &body)
        .await
        .map_err(|e| BridgeError::upstream("posting comment to GitHub", e))?;
    info!("Successfully posted comment.");

    Ok(Outcome::Posted)
}
