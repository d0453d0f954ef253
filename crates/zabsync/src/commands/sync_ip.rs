//! `sync-ip` command handler.

use zabsync_core::{SyncConfig, SystemResolver, read_work_list};

use crate::cli::{GlobalOpts, SyncIpArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    args: &SyncIpArgs,
    config: SyncConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let filter = match &args.input {
        Some(path) => Some(read_work_list(path)?),
        None => None,
    };

    let runner = util::connect(&config).await?;

    let resolver = SystemResolver::default();
    let report = runner.run_sync_ip(&resolver, filter.as_deref()).await?;
    output::print_report(&report, &global.output, &global.color, global.quiet);
    Ok(())
}
