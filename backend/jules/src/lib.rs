//! Jules task-session integration.
//!
//! Covers the three Jules-side concerns of the notifier: recognizing a
//! session reference embedded in a PR description, fetching session
//! metadata and activities over the Jules API, and picking the most recent
//! media artifact out of the activity stream.

pub mod activity;
pub mod client;
pub mod session;

pub use activity::{Activity, Artifact, Media, latest_media};
pub use client::JulesClient;
pub use session::{Session, extract_session_id};
