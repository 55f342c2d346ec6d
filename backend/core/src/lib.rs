//! Core types for the JulesBridge notifier.
//!
//! Holds the environment-driven configuration, the top-level error type,
//! and the pipeline outcome. Everything here is request-scoped: the process
//! loads one config, runs one pass, and exits.

pub mod config;
pub mod error;

pub use config::BridgeConfig;
pub use error::BridgeError;

/// Terminal state of a notifier run.
///
/// Both variants map to exit code 0; fatal failures surface as
/// [`BridgeError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A summary comment was posted on the pull request.
    Posted,
    /// The PR description carried no Jules task reference; nothing to do.
    NotATarget,
}
