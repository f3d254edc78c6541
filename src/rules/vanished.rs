//! Vanished message detection rule.
//!
//! lupdate keeps translations of removed source strings as `vanished`
//! (`obsolete` in older files). They are dead weight in the shipped catalog.

use crate::{
    core::{CheckContext, LoadedCatalog},
    issues::VanishedIssue,
    rules::helpers::reportable_messages,
};

pub fn check_vanished_issues(ctx: &CheckContext) -> Vec<VanishedIssue> {
    check_vanished(ctx.loaded(), &ctx.config.ignore_contexts)
}

pub fn check_vanished(catalogs: &[LoadedCatalog], ignore_contexts: &[String]) -> Vec<VanishedIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| {
            reportable_messages(loaded, ignore_contexts)
                .filter(|(_, message)| !message.translation.status.is_live())
                .map(move |(context, message)| VanishedIssue {
                    site: loaded.site(context, message),
                    status: message.translation.status,
                })
        })
        .collect()
}
