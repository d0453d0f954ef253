// ── Core error types ──
//
// User-facing errors from zabsync-core. These are NOT wire-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<zabsync_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
///
/// Everything here is fatal to the run: per-item failures never surface
/// as a `CoreError`, they are recorded in the [`RunReport`](crate::RunReport)
/// and the batch keeps going.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Setup errors ─────────────────────────────────────────────────
    #[error("Cannot connect to server: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Host group not found: {name}")]
    GroupNotFound { name: String },

    #[error("Request timed out")]
    Timeout,

    // ── Mid-run aborts ───────────────────────────────────────────────
    /// The server rejected the session token mid-run. Nothing
    /// re-authenticates, so the batch aborts instead of marking the
    /// item failed and continuing with a dead session.
    #[error("Session invalidated by server: {message}")]
    SessionExpired { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api { message: String, code: Option<i64> },

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Cannot read work list {}: {source}", .path.display())]
    WorkList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<zabsync_api::Error> for CoreError {
    fn from(err: zabsync_api::Error) -> Self {
        use zabsync_api::Error as Api;

        match err {
            Api::Authentication { message } => Self::AuthenticationFailed { message },

            Api::GroupNotFound { name } => Self::GroupNotFound { name },

            Api::Transport(e) if e.is_timeout() => Self::Timeout,

            Api::Transport(e) => Self::ConnectionFailed {
                reason: e.to_string(),
            },

            Api::Tls(reason) => Self::ConnectionFailed { reason },

            Api::InvalidUrl(e) => Self::ConnectionFailed {
                reason: e.to_string(),
            },

            Api::Fault { code, message, data } => Self::Api {
                message: match data {
                    Some(data) => format!("{message} ({data})"),
                    None => message,
                },
                code: Some(code),
            },

            Api::Protocol { message, .. } | Api::Decode { message } => Self::Api {
                message,
                code: None,
            },
        }
    }
}
