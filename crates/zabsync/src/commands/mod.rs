//! Command dispatch: bridges CLI args -> sync flows -> output formatting.

pub mod add;
pub mod config_cmd;
pub mod rename;
pub mod sync_ip;
pub mod util;

use zabsync_core::SyncConfig;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    config: SyncConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Rename(args) => rename::handle(&args, config, global).await,
        Command::Add(args) => add::handle(&args, config, global).await,
        Command::SyncIp(args) => sync_ip::handle(&args, config, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
