//! Duplicate message detection rule.
//!
//! lrelease keeps only one translation per `(context, source, comment)`,
//! so a second live definition in the same catalog is silently dropped.

use std::collections::HashMap;

use crate::{
    core::{CheckContext, LoadedCatalog, MessageKey},
    issues::DuplicateMessageIssue,
    rules::helpers::reportable_live_messages,
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    check_duplicates(ctx.loaded(), &ctx.config.ignore_contexts)
}

pub fn check_duplicates(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let mut first_lines: HashMap<MessageKey, usize> = HashMap::new();

        for (context, message) in reportable_live_messages(loaded, ignore_contexts) {
            let key = message.key(&context.name);
            match first_lines.get(&key) {
                Some(&first_line) => issues.push(DuplicateMessageIssue {
                    site: loaded.site(context, message),
                    first_line,
                }),
                None => {
                    first_lines.insert(key, message.line);
                }
            }
        }
    }

    issues
}
