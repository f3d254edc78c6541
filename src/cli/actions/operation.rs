//! Low-level catalog edits produced by actions.

use colored::Colorize;

use crate::core::{Catalog, MessageSite};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Remove the message whose `<message>` tag starts at the site's line.
    RemoveMessage { site: MessageSite, reason: String },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::RemoveMessage { site, .. } => site.file_path(),
        }
    }

    /// Apply to an in-memory catalog. Returns false when the target is gone.
    pub fn apply(&self, catalog: &mut Catalog) -> bool {
        match self {
            Operation::RemoveMessage { site, .. } => {
                let Some(context) = catalog
                    .contexts
                    .iter_mut()
                    .find(|c| c.name == site.context)
                else {
                    return false;
                };
                let before = context.messages.len();
                context
                    .messages
                    .retain(|m| !(m.line == site.line() && m.source == site.source));
                context.messages.len() < before
            }
        }
    }

    pub fn preview(&self) {
        match self {
            Operation::RemoveMessage { site, reason } => {
                println!(
                    "  {} {}:{}  {}::{} {}",
                    "-".red(),
                    site.file_path(),
                    site.line(),
                    site.context,
                    site.source,
                    format!("({})", reason).dimmed()
                );
            }
        }
    }
}
