//! Unfinished translation detection rule.
//!
//! Reports live messages whose `<translation>` still carries
//! `type="unfinished"`, whether or not text was filled in.

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationStatus},
    issues::UnfinishedIssue,
    rules::helpers::reportable_live_messages,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_unfinished(ctx.loaded(), &ctx.config.ignore_contexts)
}

pub fn check_unfinished(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<UnfinishedIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let locale = loaded.catalog.locale();
        for (context, message) in reportable_live_messages(loaded, ignore_contexts) {
            if message.translation.status != TranslationStatus::Unfinished {
                continue;
            }
            issues.push(UnfinishedIssue {
                site: loaded.site(context, message),
                locale: locale.clone(),
                empty: message.translation.value.is_empty(),
            });
        }
    }

    issues
}
