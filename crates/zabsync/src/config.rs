//! CLI configuration — thin wrapper around `zabsync_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--server, --group, --auth, ...).

use std::io::IsTerminal;
use std::time::Duration;

use secrecy::SecretString;

use zabsync_core::{SyncConfig, TlsVerification, TokenPlacement};

use crate::cli::{AuthMode, GlobalOpts};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use zabsync_config::{Config, Profile, config_path, load_config_or_default};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate a `Profile` + global flags into a `SyncConfig`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SyncConfig, CliError> {
    // 1. Server URL (flag > env > profile)
    let url_str = global.server.as_deref().unwrap_or(&profile.server);
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    // 2. Username (flag > env > profile)
    let username = global
        .username
        .clone()
        .or_else(|| profile.username.clone())
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.into(),
        })?;

    // 3. Password: shared chain first, interactive prompt as last resort
    let password = match zabsync_config::resolve_password(profile, profile_name) {
        Ok(secret) => secret,
        Err(zabsync_config::ConfigError::NoCredentials { .. }) => {
            prompt_password(profile_name)?
        }
        Err(e) => return Err(e.into()),
    };

    // 4. Target group (flag > env > profile)
    let group = global
        .group
        .clone()
        .or_else(|| profile.group.clone())
        .ok_or_else(|| CliError::Validation {
            field: "group".into(),
            reason: "no host group configured (use --group)".into(),
        })?;

    // 5. Token placement (flag > profile)
    let token_placement = match global.auth {
        Some(mode) => placement_from_flag(mode),
        None => zabsync_config::token_placement(&profile.auth)?,
    };

    // 6. TLS verification
    let tls = if global.insecure || profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(SyncConfig {
        url,
        username,
        password,
        group,
        token_placement,
        tls,
        timeout: Duration::from_secs(global.timeout),
    })
}

/// Build a `SyncConfig` from CLI flags / env vars alone — no profile.
pub fn resolve_from_flags(
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SyncConfig, CliError> {
    let url_str = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let username = global
        .username
        .clone()
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.into(),
        })?;

    let password = match std::env::var("ZABSYNC_PASSWORD") {
        Ok(value) => SecretString::from(value),
        Err(_) => prompt_password(profile_name)?,
    };

    let group = global.group.clone().ok_or_else(|| CliError::Validation {
        field: "group".into(),
        reason: "no host group configured (use --group)".into(),
    })?;

    let token_placement = global
        .auth
        .map_or(TokenPlacement::Header, placement_from_flag);

    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(SyncConfig {
        url,
        username,
        password,
        group,
        token_placement,
        tls,
        timeout: Duration::from_secs(global.timeout),
    })
}

fn placement_from_flag(mode: AuthMode) -> TokenPlacement {
    match mode {
        AuthMode::Header => TokenPlacement::Header,
        AuthMode::Body => TokenPlacement::Body,
    }
}

/// Ask for the password interactively, but only when attached to a
/// terminal — a non-interactive run must fail fast instead of hanging.
fn prompt_password(profile_name: &str) -> Result<SecretString, CliError> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NoCredentials {
            profile: profile_name.into(),
        });
    }
    let password = rpassword::prompt_password("Password: ")?;
    Ok(SecretString::from(password))
}
