//! `add` command handler.

use zabsync_core::{SyncConfig, SystemResolver, read_work_list};

use crate::cli::{AddArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    args: &AddArgs,
    config: SyncConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let items = read_work_list(&args.input)?;

    // Setup still runs for an empty list -- bad credentials or a missing
    // group must surface even when there is nothing to do.
    let runner = util::connect(&config).await?;

    let resolver = SystemResolver::default();
    let report = runner.run_add(&items, &resolver, &args.port).await?;
    output::print_report(&report, &global.output, &global.color, global.quiet);
    Ok(())
}
