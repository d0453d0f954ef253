//! `rename` command handler.

use zabsync_core::SyncConfig;

use crate::cli::{GlobalOpts, RenameArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    args: &RenameArgs,
    config: SyncConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let runner = util::connect(&config).await?;
    let report = runner.run_rename(&args.suffix).await?;
    output::print_report(&report, &global.output, &global.color, global.quiet);
    Ok(())
}
