//! Shared helpers for command handlers.

use zabsync_core::{SyncConfig, SyncRunner};

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;

/// Build a `SyncConfig` from the config file, profile, and CLI overrides.
pub fn build_sync_config(global: &GlobalOpts) -> Result<SyncConfig, CliError> {
    let cfg = config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);

    // If a profile exists, use it with CLI flag overrides
    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return config::resolve_profile(profile, &profile_name, global);
    }

    // No profile found -- try to build from CLI flags / env vars alone
    config::resolve_from_flags(&profile_name, global)
}

/// Perform the one-time setup chain: login, then group resolution.
pub async fn connect(config: &SyncConfig) -> Result<SyncRunner, CliError> {
    Ok(SyncRunner::connect(config).await?)
}
