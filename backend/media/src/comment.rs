//! Final comment composition.

/// Build the Markdown body posted to the pull request: fixed header, the
/// session's original prompt, then the artifact section.
pub fn compose_comment(prompt: &str, media_section: &str) -> String {
    format!("### Jules Task Info\n\n**Original Prompt:**\n{prompt}\n{media_section}")
}
