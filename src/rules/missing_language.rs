//! Missing language attribute rule.
//!
//! Without `language` on `<TS>`, lrelease and Linguist cannot pick plural
//! rules for the catalog.

use crate::{
    core::{CheckContext, LoadedCatalog, locale_from_file_name},
    issues::MissingLanguageIssue,
};

pub fn check_missing_language_issues(ctx: &CheckContext) -> Vec<MissingLanguageIssue> {
    check_missing_language(ctx.loaded())
}

pub fn check_missing_language(catalogs: &[LoadedCatalog]) -> Vec<MissingLanguageIssue> {
    catalogs
        .iter()
        .filter(|loaded| {
            loaded
                .catalog
                .language
                .as_deref()
                .is_none_or(|l| l.trim().is_empty())
        })
        .map(|loaded| MissingLanguageIssue {
            file_path: loaded.catalog.file_path.clone(),
            suggested: locale_from_file_name(&loaded.catalog.file_path),
        })
        .collect()
}
