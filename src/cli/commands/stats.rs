use anyhow::Result;

use super::super::args::StatsCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, StatsSummary};
use crate::{
    core::{CatalogStats, CheckContext, catalog_stats},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let catalogs: Vec<CatalogStats> = ctx.catalogs().map(catalog_stats).collect();

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            catalogs,
            json: cmd.json,
        }),
        issues,
        ctx.files_checked(),
        false,
    ))
}
