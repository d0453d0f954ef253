// ── Runtime connection configuration ──
//
// These types describe *how* to reach the inventory server for one run.
// They carry credential data and connection tuning, but never touch disk.
// The CLI constructs a `SyncConfig` and hands it in; core never reads
// config files or environment variables itself.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Where the session token travels on authenticated calls.
///
/// Core-level mirror of `zabsync_api::AuthPlacement` so that config
/// construction does not depend on the api crate's types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPlacement {
    /// `Authorization: Bearer` header (current servers).
    #[default]
    Header,
    /// Top-level `auth` member of the request body (older servers).
    Body,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed frontends).
    DangerAcceptInvalid,
}

/// Configuration for one synchronization run against one server.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Frontend base URL (e.g., `https://zabbix.example.com/`).
    pub url: Url,
    /// API username.
    pub username: String,
    /// API password. Sent in cleartext inside the login request body, so
    /// the URL should be HTTPS.
    pub password: SecretString,
    /// Target host group name, resolved to an id once per run.
    pub group: String,
    /// Token encoding for authenticated calls.
    pub token_placement: TokenPlacement,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-call request timeout.
    pub timeout: Duration,
}
