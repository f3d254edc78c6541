//! Rule implementations for tscat.
//!
//! Each rule is a pure function over the loaded catalogs returning a
//! specific issue type, with a thin `check_*_issues(ctx)` wrapper that
//! pulls its inputs from a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `helpers`: Message filtering shared by the rules
//! - `unfinished`: Translations still marked unfinished
//! - `vanished`: Vanished/obsolete messages
//! - `placeholder`: `%1`/`%n` marker mismatches
//! - `numerus`: Wrong number of plural forms
//! - `duplicate`: Duplicate messages within a catalog
//! - `out_of_sync`: Messages missing from some catalogs
//! - `empty`: Finished translations without text
//! - `missing_language`: `<TS>` without a language

pub mod duplicate;
pub mod empty;
pub mod helpers;
pub mod missing_language;
pub mod numerus;
pub mod out_of_sync;
pub mod placeholder;
pub mod unfinished;
pub mod vanished;

use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
};

/// Rules that run over catalogs (parse errors come from loading).
pub const CATALOG_RULES: &[Rule] = &[
    Rule::Unfinished,
    Rule::Vanished,
    Rule::PlaceholderMismatch,
    Rule::NumerusForms,
    Rule::DuplicateMessage,
    Rule::OutOfSync,
    Rule::EmptyTranslation,
    Rule::MissingLanguage,
];

/// Run one rule and wrap its results as [`Issue`]s.
pub fn run_rule(ctx: &CheckContext, rule: Rule) -> Vec<Issue> {
    match rule {
        Rule::Unfinished => wrap(unfinished::check_unfinished_issues(ctx), Issue::Unfinished),
        Rule::Vanished => wrap(vanished::check_vanished_issues(ctx), Issue::Vanished),
        Rule::PlaceholderMismatch => wrap(
            placeholder::check_placeholder_issues(ctx),
            Issue::PlaceholderMismatch,
        ),
        Rule::NumerusForms => wrap(numerus::check_numerus_issues(ctx), Issue::NumerusForms),
        Rule::DuplicateMessage => wrap(
            duplicate::check_duplicate_issues(ctx),
            Issue::DuplicateMessage,
        ),
        Rule::OutOfSync => wrap(out_of_sync::check_out_of_sync_issues(ctx), Issue::OutOfSync),
        Rule::EmptyTranslation => wrap(
            empty::check_empty_translation_issues(ctx),
            Issue::EmptyTranslation,
        ),
        Rule::MissingLanguage => wrap(
            missing_language::check_missing_language_issues(ctx),
            Issue::MissingLanguage,
        ),
        Rule::ParseError => ctx
            .parse_errors()
            .iter()
            .cloned()
            .map(Issue::ParseError)
            .collect(),
    }
}

/// Run the given rules plus parse errors, sorted for reporting.
pub fn run_rules(ctx: &CheckContext, rules: &[Rule]) -> Vec<Issue> {
    let mut issues: Vec<Issue> = rules
        .iter()
        .filter(|rule| **rule != Rule::ParseError)
        .flat_map(|rule| run_rule(ctx, *rule))
        .collect();
    issues.extend(run_rule(ctx, Rule::ParseError));
    issues.sort();
    issues
}

fn wrap<T>(issues: Vec<T>, f: fn(T) -> Issue) -> Vec<Issue> {
    issues.into_iter().map(f).collect()
}
