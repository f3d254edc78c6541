//! Numerus form count rule.
//!
//! A translated `numerus="yes"` message must provide exactly as many
//! `<numerusform>` entries as the target language has plural forms,
//! otherwise the runtime picks a missing form and shows the source text.

use crate::{
    core::{CheckContext, LoadedCatalog, PluralRule, TranslationValue},
    issues::NumerusFormsIssue,
    rules::helpers::reportable_live_messages,
};

pub fn check_numerus_issues(ctx: &CheckContext) -> Vec<NumerusFormsIssue> {
    check_numerus_forms(ctx.loaded(), &ctx.config.ignore_contexts)
}

pub fn check_numerus_forms(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<NumerusFormsIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let locale = loaded.catalog.locale();
        let Some(rule) = PluralRule::for_locale(&locale) else {
            tracing::debug!(
                "No plural rule for '{}', skipping numerus check of {}",
                locale,
                loaded.catalog.file_path
            );
            continue;
        };
        let expected = rule.form_count();

        for (context, message) in reportable_live_messages(loaded, ignore_contexts) {
            if !message.numerus || message.translation.value.is_empty() {
                continue;
            }

            let actual = match &message.translation.value {
                // Translated without <numerusform> children.
                TranslationValue::Single(_) => 0,
                TranslationValue::Plural(forms) => forms.len(),
            };

            if actual != expected {
                issues.push(NumerusFormsIssue {
                    site: loaded.site(context, message),
                    locale: locale.clone(),
                    expected,
                    actual,
                });
            }
        }
    }

    issues
}
