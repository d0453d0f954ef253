//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` / `ConfigError` variants into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use zabsync_config::ConfigError;
use zabsync_core::CoreError;

/// Exit codes. Per-item failures inside a run do not change the exit
/// code — they live in the run report.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to server")]
    #[diagnostic(
        code(zabsync::connection_failed),
        help(
            "Check that the frontend is running and the URL is reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(zabsync::auth_failed),
        help(
            "Verify the username and password for this server.\n\
             Set ZABSYNC_PASSWORD or store the password in the system keyring."
        )
    )]
    AuthFailed { message: String },

    #[error("Session invalidated by server: {message}")]
    #[diagnostic(
        code(zabsync::session_expired),
        help("The token was revoked mid-run; re-run the command to start a fresh session.")
    )]
    SessionExpired { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(zabsync::no_credentials),
        help(
            "Set username/password in the config file, or pass --username\n\
             and set ZABSYNC_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Host group '{name}' not found")]
    #[diagnostic(
        code(zabsync::group_not_found),
        help("Check the group name on the server, or pass a different --group.")
    )]
    GroupNotFound { name: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error: {message}")]
    #[diagnostic(code(zabsync::api_error))]
    ApiError { message: String, code: Option<i64> },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(zabsync::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file not found")]
    #[diagnostic(
        code(zabsync::no_config),
        help(
            "Pass --server (or set ZABSYNC_SERVER), or create a profile.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(zabsync::config))]
    Config(#[from] ConfigError),

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("Request timed out")]
    #[diagnostic(
        code(zabsync::timeout),
        help("Increase timeout with --timeout or check server responsiveness.")
    )]
    Timeout,

    // ── Input / IO ───────────────────────────────────────────────────

    #[error("Cannot read work list: {message}")]
    #[diagnostic(
        code(zabsync::work_list),
        help("Check the path passed to the command; one identifier per line.")
    )]
    WorkList { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } | Self::SessionExpired { .. } => {
                exit_code::AUTH
            }
            Self::GroupNotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { reason } => Self::ConnectionFailed { reason },

            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },

            CoreError::SessionExpired { message } => Self::SessionExpired { message },

            CoreError::GroupNotFound { name } => Self::GroupNotFound { name },

            CoreError::Timeout => Self::Timeout,

            CoreError::Api { message, code } => Self::ApiError { message, code },

            CoreError::WorkList { path, source } => Self::WorkList {
                message: format!("{}: {source}", path.display()),
            },
        }
    }
}
