use thiserror::Error;

/// Top-level error type for the JulesBridge notifier.
///
/// Every variant is fatal: the binary logs it and exits non-zero.
/// Recoverable conditions (activities fetch, inline artifact decode) never
/// become a `BridgeError`; they degrade the rendered comment instead.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("configuration error: missing required environment variables: {0}")]
    Config(String),

    #[error("upstream error while {step}: {source:#}")]
    Upstream {
        step: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BridgeError {
    /// Wrap a transport/API failure with the pipeline step it occurred in.
    pub fn upstream(step: &'static str, source: anyhow::Error) -> Self {
        Self::Upstream { step, source }
    }
}
