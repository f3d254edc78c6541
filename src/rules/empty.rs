//! Empty finished translation rule.
//!
//! A translation without `type="unfinished"` but with no text (or with an
//! empty plural form) makes the runtime fall back to the source string
//! although the catalog claims the message is done.

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationStatus},
    issues::EmptyTranslationIssue,
    rules::helpers::reportable_live_messages,
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    check_empty_translations(ctx.loaded(), &ctx.config.ignore_contexts)
}

pub fn check_empty_translations(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<EmptyTranslationIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let locale = loaded.catalog.locale();
        for (context, message) in reportable_live_messages(loaded, ignore_contexts) {
            let translation = &message.translation;
            if translation.status != TranslationStatus::Finished {
                continue;
            }
            let value = &translation.value;
            if value.is_empty() || value.texts().iter().any(|t| t.is_empty()) {
                issues.push(EmptyTranslationIssue {
                    site: loaded.site(context, message),
                    locale: locale.clone(),
                });
            }
        }
    }

    issues
}
