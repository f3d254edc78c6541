//! Helper functions for MCP server operations.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use super::types::{IssueItem, Pagination, TranslationEntry};
use crate::{
    cli::CommonArgs,
    core::{
        CheckContext, Message, PluralRule, TranslationStatus, TranslationValue,
        plural::split_locale,
    },
    issues::{Issue, Report, ReportLocation, Rule},
    rules::CATALOG_RULES,
};

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// Load the project at `project_root_path` the same way the CLI does.
pub fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let args = CommonArgs {
        root: Some(PathBuf::from(project_root_path)),
        ..Default::default()
    };
    CheckContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// Serialize a result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Parse a rule name as shown in reports (`placeholder-mismatch`).
pub fn parse_rule(name: &str) -> Option<Rule> {
    CATALOG_RULES
        .iter()
        .copied()
        .chain(std::iter::once(Rule::ParseError))
        .find(|rule| rule.to_string() == name)
}

/// Resolve `limit`/`offset` parameters.
pub fn page_bounds(limit: Option<u32>, offset: Option<u32>) -> (usize, usize) {
    let limit = limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    (limit, offset)
}

pub fn paginate<T>(items: Vec<T>, limit: usize, offset: usize) -> (Vec<T>, Pagination) {
    let total = items.len();
    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total;
    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}

/// Whether a catalog locale satisfies a requested one. `de` matches every
/// German catalog, `pt_BR` only Brazilian Portuguese.
pub fn locale_matches(requested: &str, actual: &str) -> bool {
    let (language, territory) = split_locale(requested);
    let (actual_language, actual_territory) = split_locale(actual);
    language == actual_language && (territory.is_none() || territory == actual_territory)
}

/// Locale of each loaded catalog, keyed by file path.
pub fn locales_by_file(ctx: &CheckContext) -> HashMap<String, String> {
    ctx.catalogs()
        .map(|c| (c.file_path.clone(), c.locale()))
        .collect()
}

/// Locales an issue concerns: the catalog it was found in, plus the
/// catalogs lacking the message for out-of-sync issues.
pub fn issue_locales(issue: &Issue, locales: &HashMap<String, String>) -> Vec<String> {
    let mut result: BTreeSet<String> = BTreeSet::new();
    if let Some(locale) = locales.get(issue.file_path()) {
        result.insert(locale.clone());
    }
    if let Issue::OutOfSync(out_of_sync) = issue {
        result.extend(out_of_sync.missing_in.iter().cloned());
    }
    result.into_iter().collect()
}

pub fn issue_item(issue: &Issue, locales: Vec<String>) -> IssueItem {
    let (line, context, source) = match issue.location() {
        ReportLocation::Message(site) => (
            Some(site.line()),
            Some(site.context.clone()),
            Some(site.source.clone()),
        ),
        ReportLocation::File { .. } => (None, None, None),
    };

    IssueItem {
        rule: issue.rule().to_string(),
        severity: issue.severity().to_string(),
        file_path: issue.file_path().to_string(),
        line,
        context,
        source,
        locales,
        message: issue.message(),
        details: issue.details(),
        hint: issue.hint(),
    }
}

/// Write one entry into a message and mark it finished.
///
/// Numerus messages take `forms` (a lone `translation` counts as one form)
/// and must match the locale's form count when the plural rule is known.
pub fn apply_entry(
    message: &mut Message,
    entry: &TranslationEntry,
    rule: Option<PluralRule>,
) -> Result<(), String> {
    if !message.translation.status.is_live() {
        return Err(format!(
            "message is {}; it no longer exists in the application",
            message.translation.status
        ));
    }

    let value = if message.numerus {
        let forms = match (&entry.forms, &entry.translation) {
            (Some(forms), _) => forms.clone(),
            (None, Some(text)) => vec![text.clone()],
            (None, None) => return Err("numerus message needs 'forms'".to_string()),
        };
        if let Some(rule) = rule
            && forms.len() != rule.form_count()
        {
            return Err(format!(
                "expected {} plural form(s), got {}",
                rule.form_count(),
                forms.len()
            ));
        }
        TranslationValue::Plural(forms)
    } else {
        match (&entry.translation, &entry.forms) {
            (Some(text), _) => TranslationValue::Single(text.clone()),
            (None, Some(_)) => {
                return Err("'forms' is only valid for numerus messages".to_string());
            }
            (None, None) => return Err("missing 'translation'".to_string()),
        }
    };

    if value.is_empty() {
        return Err("translation cannot be empty".to_string());
    }

    message.translation.value = value;
    message.translation.status = TranslationStatus::Finished;
    Ok(())
}
