//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types.

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;

use super::operation::Operation;
use crate::core::{LoadedCatalog, save_catalog};

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of operations whose message was not found anymore.
    pub skipped: usize,
    /// Number of changes actually applied to catalogs.
    pub changes_applied: usize,
    /// Number of catalog files rewritten.
    pub files_modified: usize,
    /// Number of contexts dropped because they became empty.
    pub contexts_removed: usize,
}

/// Action trait - converts Issues into Operations and executes them.
///
/// ```ignore
/// if apply {
///     RemoveMessage::run(&issues, ctx.loaded_mut())?;
/// } else {
///     RemoveMessage::preview(&issues);
/// }
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action against the loaded catalogs and save the ones
    /// that changed.
    fn run(issues: &[I], catalogs: &mut [LoadedCatalog]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops, catalogs)
    }

    /// Preview the action (dry-run mode).
    fn preview(issues: &[I]) {
        for op in &Self::to_operations(issues) {
            op.preview();
        }
    }
}

pub(crate) fn execute_operations(
    ops: &[Operation],
    catalogs: &mut [LoadedCatalog],
) -> Result<ActionStats> {
    let mut ops_by_file: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        ops_by_file.entry(op.file_path()).or_default().push(op);
    }

    let mut stats = ActionStats::default();
    let mut files_modified: HashSet<String> = HashSet::new();

    for (file_path, file_ops) in ops_by_file {
        let Some(loaded) = catalogs
            .iter_mut()
            .find(|l| l.catalog.file_path == file_path)
        else {
            tracing::warn!("Catalog {} is no longer loaded, skipping", file_path);
            stats.skipped += file_ops.len();
            continue;
        };

        let mut applied = 0;
        for op in file_ops {
            if op.apply(&mut loaded.catalog) {
                applied += 1;
            } else {
                stats.skipped += 1;
            }
        }

        if applied > 0 {
            let before = loaded.catalog.contexts.len();
            loaded.catalog.contexts.retain(|c| !c.messages.is_empty());
            stats.contexts_removed += before - loaded.catalog.contexts.len();

            save_catalog(&loaded.catalog)?;
            tracing::debug!("Rewrote {} ({} change(s))", file_path, applied);
            stats.changes_applied += applied;
            files_modified.insert(file_path.to_string());
        }
    }

    stats.files_modified = files_modified.len();
    Ok(stats)
}
