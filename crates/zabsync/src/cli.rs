//! Clap derive structures for the `zabsync` CLI.
//!
//! Defines the complete command tree, global flags, and shared enums.
//! This module must stay dependent on clap + clap_complete only — the
//! build script includes it directly to generate man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// zabsync -- keep a monitoring host inventory in sync with DNS
#[derive(Debug, Parser)]
#[command(
    name = "zabsync",
    version,
    about = "Reconcile monitoring inventory hosts against DNS",
    long_about = "Batch synchronizer for Zabbix-style monitoring inventories.\n\n\
        Logs in once, resolves the target host group once, then applies\n\
        per-host mutations (rename, register, interface repoint) with\n\
        per-item failure isolation and a final run report.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "ZABSYNC_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Frontend base URL (overrides profile)
    #[arg(long, short = 's', env = "ZABSYNC_SERVER", global = true)]
    pub server: Option<String>,

    /// Target host group name
    #[arg(long, short = 'g', env = "ZABSYNC_GROUP", global = true)]
    pub group: Option<String>,

    /// API username
    #[arg(long, short = 'u', env = "ZABSYNC_USERNAME", global = true)]
    pub username: Option<String>,

    /// Where the session token travels on authenticated calls
    #[arg(long, env = "ZABSYNC_AUTH", global = true)]
    pub auth: Option<AuthMode>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ZABSYNC_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ZABSYNC_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "ZABSYNC_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Shared enums ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AuthMode {
    /// Authorization: Bearer header (current servers)
    Header,
    /// Top-level `auth` member of the request body (older servers)
    Body,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one item per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rename every group member's display name by appending a suffix
    #[command(alias = "rn")]
    Rename(RenameArgs),

    /// Register work-list hosts in the target group (DNS-resolved)
    Add(AddArgs),

    /// Repoint member interfaces at freshly resolved addresses
    #[command(name = "sync-ip", alias = "sync")]
    SyncIp(SyncIpArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Per-command args ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Suffix appended to each display name (members already carrying
    /// it are skipped)
    #[arg(long, short = 'S')]
    pub suffix: String,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Work list: one DNS name per line, `#` comments and blanks skipped
    pub input: PathBuf,

    /// Agent port for the created interface
    #[arg(long, default_value = "10050")]
    pub port: String,
}

#[derive(Debug, Args)]
pub struct SyncIpArgs {
    /// Optional work list restricting reconciliation to the listed
    /// member names
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
