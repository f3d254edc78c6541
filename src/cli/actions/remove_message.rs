//! RemoveMessage action.
//!
//! Deletes vanished or obsolete messages from catalogs.
//! Used by the `tscat clean` command.

use super::operation::Operation;
use super::traits::Action;
use crate::issues::VanishedIssue;

/// Action to remove messages from `.ts` catalogs.
pub struct RemoveMessage;

impl Action<VanishedIssue> for RemoveMessage {
    fn to_operations(issues: &[VanishedIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::RemoveMessage {
                site: issue.site.clone(),
                reason: issue.status.to_string(),
            })
            .collect()
    }
}
