//! Helper functions shared by the rule implementations.

use crate::core::{Context, LoadedCatalog, Message};

/// Messages of a catalog the rules should look at: everything outside the
/// configured `ignoreContexts`.
pub fn reportable_messages<'a>(
    loaded: &'a LoadedCatalog,
    ignore_contexts: &'a [String],
) -> impl Iterator<Item = (&'a Context, &'a Message)> + 'a {
    loaded
        .catalog
        .messages()
        .filter(move |(context, _)| !ignore_contexts.iter().any(|c| c == &context.name))
}

/// Same as [`reportable_messages`], restricted to live messages.
pub fn reportable_live_messages<'a>(
    loaded: &'a LoadedCatalog,
    ignore_contexts: &'a [String],
) -> impl Iterator<Item = (&'a Context, &'a Message)> + 'a {
    reportable_messages(loaded, ignore_contexts)
        .filter(|(_, message)| message.translation.status.is_live())
}
