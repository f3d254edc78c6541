//! Out-of-sync catalog detection rule.
//!
//! Catalogs generated by the same lupdate run share one set of live
//! messages. A message that is live in some catalogs but missing (or only
//! vanished) in others means a catalog was not regenerated. Each such
//! message is reported once, at the first catalog (by path) that has it.

use std::collections::{BTreeMap, HashSet};

use crate::{
    core::{CheckContext, Context, LoadedCatalog, Message, MessageKey},
    issues::OutOfSyncIssue,
    rules::helpers::reportable_live_messages,
};

pub fn check_out_of_sync_issues(ctx: &CheckContext) -> Vec<OutOfSyncIssue> {
    check_out_of_sync(ctx.loaded(), &ctx.config.ignore_contexts)
}

pub fn check_out_of_sync(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<OutOfSyncIssue> {
    if catalogs.len() < 2 {
        return Vec::new();
    }

    let mut ordered: Vec<&LoadedCatalog> = catalogs.iter().collect();
    ordered.sort_by(|a, b| a.catalog.file_path.cmp(&b.catalog.file_path));

    // First catalog and message per key, in key order for stable output.
    let mut first_seen: BTreeMap<MessageKey, (usize, &Context, &Message)> = BTreeMap::new();
    let mut key_sets: Vec<HashSet<MessageKey>> = Vec::with_capacity(ordered.len());
    for (index, loaded) in ordered.iter().copied().enumerate() {
        let mut keys = HashSet::new();
        for (context, message) in reportable_live_messages(loaded, ignore_contexts) {
            let key = message.key(&context.name);
            first_seen
                .entry(key.clone())
                .or_insert((index, context, message));
            keys.insert(key);
        }
        key_sets.push(keys);
    }

    let mut issues = Vec::new();
    for (key, (index, context, message)) in first_seen {
        let mut missing_in: Vec<String> = ordered
            .iter()
            .zip(&key_sets)
            .filter(|(_, keys)| !keys.contains(&key))
            .map(|(loaded, _)| loaded.catalog.locale())
            .collect();
        if missing_in.is_empty() {
            continue;
        }
        missing_in.sort();

        issues.push(OutOfSyncIssue {
            site: ordered[index].site(context, message),
            missing_in,
        });
    }

    issues
}
