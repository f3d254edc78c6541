//! Placeholder mismatch detection rule.
//!
//! Qt substitutes `%1`..`%99` (`QString::arg`) and `%n` (numerus count) at
//! runtime. A translation that drops or invents one of these markers shows
//! a literal `%` or loses data, so every non-empty translation text (each
//! plural form for numerus messages) must carry the same set of markers as
//! its source.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationValue},
    issues::PlaceholderMismatchIssue,
    rules::helpers::reportable_live_messages,
};

/// `%1`..`%99`, `%n`, and their localized `%L` variants.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(n|[1-9][0-9]?)").unwrap());

/// Markers of a text, `%L` variants folded into their plain form.
pub fn placeholders(text: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|cap| format!("%{}", &cap[1]))
        .collect()
}

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    check_placeholders(ctx.loaded(), &ctx.config.ignore_contexts)
}

pub fn check_placeholders(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let locale = loaded.catalog.locale();

        for (context, message) in reportable_live_messages(loaded, ignore_contexts) {
            let expected = placeholders(&message.source);

            let texts: Vec<(Option<usize>, &str)> = match &message.translation.value {
                TranslationValue::Single(text) => vec![(None, text.as_str())],
                TranslationValue::Plural(forms) => forms
                    .iter()
                    .enumerate()
                    .map(|(i, form)| (Some(i), form.as_str()))
                    .collect(),
            };

            for (form, text) in texts {
                if text.is_empty() {
                    continue;
                }
                let found = placeholders(text);
                if found != expected {
                    issues.push(PlaceholderMismatchIssue {
                        site: loaded.site(context, message),
                        locale: locale.clone(),
                        expected: expected.iter().cloned().collect(),
                        found: found.into_iter().collect(),
                        form,
                        translation: text.to_string(),
                    });
                }
            }
        }
    }

    issues
}
