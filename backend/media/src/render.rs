//! Markdown rendering of the selected media artifact.
//!
//! Exactly one of four renderings is produced: an image embed, a download
//! link, an "uploaded as file" note for inline content, or an absence /
//! empty-artifact note. Inline-content failures degrade to an error note;
//! they never abort the run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{error, info};

use julesbridge_jules::Media;

use crate::mime::{DEFAULT_MIME, extension_for_mime, is_image};

/// Base name for persisted inline artifacts.
pub const ARTIFACT_FILE_STEM: &str = "jules_artifact";

/// Render the selected artifact as a Markdown section for the comment.
///
/// `out_dir` is where an inline artifact lands; the run uses the working
/// directory, tests pass a tempdir. The returned string starts with the
/// section's leading newline.
pub fn render_media(media: Option<&Media>, out_dir: &Path) -> String {
    let Some(media) = media else {
        return "\n**Latest Media Artifact:**\n\nNo media artifacts found.".to_string();
    };

    let mime = media.mime_type.as_deref().unwrap_or(DEFAULT_MIME);

    if let Some(uri) = media.uri.as_deref() {
        if is_image(mime) {
            format!("\n**Latest Media Artifact:**\n\n![Media Artifact]({uri})")
        } else {
            format!("\n**Latest Media Artifact:**\n\n[Download Media]({uri})")
        }
    } else if let Some(data) = media.data.as_deref() {
        match persist_inline(data, mime, out_dir) {
            Ok(filename) => {
                let filename = filename.display();
                info!("Saved media artifact to {}", filename);
                format!(
                    "\n**Latest Media Artifact:**\n\nA media artifact ({mime}) was found and has been uploaded as a workflow artifact named `{filename}`."
                )
            }
            Err(err) => {
                error!("Error processing media data: {:#}", err);
                "\n**Latest Media Artifact:**\n\nError processing media artifact data."
                    .to_string()
            }
        }
    } else {
        "\n**Latest Media Artifact:**\n\nMedia artifact found but contains no data.".to_string()
    }
}

/// Decode base64 inline content and write it to `jules_artifact.<ext>`.
///
/// Returns the bare filename (no directory) for use in the comment text.
/// The encoding field is never inspected; `data` is assumed base64.
fn persist_inline(data: &str, mime: &str, out_dir: &Path) -> Result<PathBuf> {
    let bytes = STANDARD
        .decode(data)
        .context("artifact data is not valid base64")?;
    let filename = PathBuf::from(format!(
        "{}.{}",
        ARTIFACT_FILE_STEM,
        extension_for_mime(mime)
    ));
    std::fs::write(out_dir.join(&filename), bytes)
        .with_context(|| format!("failed to write {}", filename.display()))?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(mime: Option<&str>, uri: Option<&str>, data: Option<&str>) -> Media {
        Media {
            mime_type: mime.map(str::to_string),
            uri: uri.map(str::to_string),
            data: data.map(str::to_string),
        }
    }

    #[test]
    fn absence_renders_not_found_note() {
        let out = render_media(None, Path::new("."));
        assert!(out.contains("No media artifacts found."));
    }

    #[test]
    fn image_uri_renders_an_embed() {
        let m = media(Some("image/png"), Some("http://x/y.png"), None);
        let out = render_media(Some(&m), Path::new("."));
        assert!(out.contains("![Media Artifact](http://x/y.png)"));
    }

    #[test]
    fn non_image_uri_renders_a_download_link_never_an_embed() {
        let m = media(Some("application/pdf"), Some("http://x/report.pdf"), None);
        let out = render_media(Some(&m), Path::new("."));
        assert!(out.contains("[Download Media](http://x/report.pdf)"));
        assert!(!out.contains("!["));
    }

    #[test]
    fn uri_wins_over_inline_data() {
        let m = media(Some("image/png"), Some("http://x/y.png"), Some("aGk="));
        let out = render_media(Some(&m), Path::new("/nonexistent"));
        assert!(out.contains("![Media Artifact](http://x/y.png)"));
    }

    #[test]
    fn inline_data_is_decoded_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = STANDARD.encode(b"fake png bytes");
        let m = media(Some("image/png"), None, Some(&encoded));
        let out = render_media(Some(&m), dir.path());
        assert!(out.contains("`jules_artifact.png`"));
        let written = std::fs::read(dir.path().join("jules_artifact.png")).unwrap();
        assert_eq!(written, b"fake png bytes");
    }

    #[test]
    fn missing_mime_type_persists_with_default() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = STANDARD.encode(b"bytes");
        let m = media(None, None, Some(&encoded));
        let out = render_media(Some(&m), dir.path());
        assert!(out.contains("application/octet-stream"));
        assert!(dir.path().join("jules_artifact.octet-stream").exists());
    }

    #[test]
    fn invalid_base64_degrades_to_error_note() {
        let dir = tempfile::tempdir().unwrap();
        let m = media(Some("image/png"), None, Some("%%% not base64 %%%"));
        let out = render_media(Some(&m), dir.path());
        assert!(out.contains("Error processing media artifact data."));
        assert!(!dir.path().join("jules_artifact.png").exists());
    }

    #[test]
    fn unwritable_directory_degrades_to_error_note() {
        let m = media(Some("image/png"), None, Some("aGk="));
        let out = render_media(Some(&m), Path::new("/nonexistent/nested/dir"));
        assert!(out.contains("Error processing media artifact data."));
    }

    #[test]
    fn empty_media_renders_no_data_note() {
        let m = media(Some("image/png"), None, None);
        let out = render_media(Some(&m), Path::new("."));
        assert!(out.contains("Media artifact found but contains no data."));
    }
}
