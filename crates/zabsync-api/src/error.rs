use thiserror::Error;

/// Top-level error type for the `zabsync-api` crate.
///
/// Covers every failure mode of a run against the inventory API:
/// authentication, transport, protocol faults, and record decoding.
/// `zabsync-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, account locked, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Protocol ────────────────────────────────────────────────────
    /// Application-level rejection carried in the response envelope's
    /// `error` member.
    #[error("API fault {code}: {message}{}", .data.as_deref().map(|d| format!(" ({d})")).unwrap_or_default())]
    Fault {
        code: i64,
        message: String,
        data: Option<String>,
    },

    /// Malformed response envelope: not JSON, missing the echoed `id`,
    /// or carrying neither `result` nor `error`. Distinct from
    /// [`Fault`](Self::Fault) — the remote side did not produce a
    /// well-formed rejection, it produced garbage.
    #[error("Protocol error: {message}")]
    Protocol { message: String, body: String },

    /// A well-formed envelope whose `result` payload did not match the
    /// expected shape for the method.
    #[error("Decode error: {message}")]
    Decode { message: String },

    // ── Resolution ──────────────────────────────────────────────────
    /// No host group matched the configured name.
    #[error("Host group '{name}' not found")]
    GroupNotFound { name: String },
}

impl Error {
    /// Returns `true` if this error indicates the session token was
    /// rejected mid-run. No component re-authenticates, so the caller
    /// must treat this as fatal rather than as a per-item failure.
    pub fn is_auth_expired(&self) -> bool {
        match self {
            Self::Authentication { .. } => true,
            Self::Fault { message, data, .. } => {
                let text = data.as_deref().unwrap_or(message);
                text.contains("re-login") || text.contains("Not authorised")
                    || text.contains("Not authorized")
                    || text.contains("Session terminated")
            }
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error a caller might retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::Error;

    #[test]
    fn fault_display_includes_data() {
        let err = Error::Fault {
            code: -32602,
            message: "Invalid params.".into(),
            data: Some("Incorrect user name or password.".into()),
        };
        let text = err.to_string();
        assert!(text.contains("-32602"));
        assert!(text.contains("Incorrect user name or password."));
    }

    #[test]
    fn session_termination_is_auth_expired() {
        let err = Error::Fault {
            code: -32602,
            message: "Invalid params.".into(),
            data: Some("Session terminated, re-login, please.".into()),
        };
        assert!(err.is_auth_expired());

        let err = Error::Fault {
            code: -32500,
            message: "Application error.".into(),
            data: Some("No permissions to referred object.".into()),
        };
        assert!(!err.is_auth_expired());
    }
}
