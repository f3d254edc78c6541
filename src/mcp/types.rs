use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{CatalogStats, SourceRef};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .tscatrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCatalogsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only return issues of this rule (e.g. "unfinished", "placeholder-mismatch")
    pub rule: Option<String>,
    /// Only return issues concerning this locale (e.g. "de", "pt_BR")
    pub locale: Option<String>,
    /// Page size (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStatsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Target locale (e.g. "ko", "pt-BR")
    pub locale: String,
    /// Context name (usually the UI class)
    pub context: String,
    /// Source text as written in the code
    pub source: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Count for numerus messages
    pub count: Option<i64>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    pub context: String,
    pub source: String,
    /// Disambiguation comment of the message, if it has one
    pub comment: Option<String>,
    /// Translation text for ordinary messages
    pub translation: Option<String>,
    /// Plural forms for numerus messages, in the locale's form order
    pub forms: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetTranslationsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Locale of the catalog to edit
    pub locale: String,
    pub translations: Vec<TranslationEntry>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translations_root: String,
    pub ignores: Vec<String>,
    pub include_unfinished: bool,
    pub ignore_contexts: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translations_root: c.translations_root,
            ignores: c.ignores,
            include_unfinished: c.include_unfinished,
            ignore_contexts: c.ignore_contexts,
        }
    }
}

// ============================================================
// Catalog Types (get_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub translations_dir: String,
    pub catalogs: Vec<CatalogInfo>,
    /// Files that could not be parsed
    pub parse_errors: Vec<FileError>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub locale: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    pub context_count: usize,
    pub message_count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileError {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Scan Types (scan_overview, scan_issues)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub files_checked: usize,
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Rules with at least one issue
    pub rules: Vec<RuleStats>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub severity: String,
    pub total_count: usize,
    pub affected_locales: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// A single issue
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    /// Line of the `<message>` tag; absent for file-level issues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub locales: Vec<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

// ============================================================
// Stats Types (get_stats)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    pub catalogs: Vec<StatsItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsItem {
    pub locale: String,
    pub file_path: String,
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub percent: usize,
}

impl From<CatalogStats> for StatsItem {
    fn from(s: CatalogStats) -> Self {
        Self {
            locale: s.locale,
            file_path: s.file_path,
            total: s.total,
            finished: s.finished,
            unfinished: s.unfinished,
            vanished: s.vanished,
            percent: s.percent,
        }
    }
}

// ============================================================
// Translate Types (translate)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    /// Locale of the catalog that answered
    pub locale: String,
    pub file_path: String,
    pub text: String,
    /// False when the source text was returned as fallback
    pub translated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub references: Vec<ReferenceItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceItem {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl From<&SourceRef> for ReferenceItem {
    fn from(r: &SourceRef) -> Self {
        Self {
            file: r.file.clone(),
            line: r.line,
        }
    }
}

// ============================================================
// SetTranslations Types (set_translations)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetTranslationsResult {
    /// True if every entry was applied
    pub success: bool,
    pub locale: String,
    pub file_path: String,
    pub updated_count: usize,
    pub failed_count: usize,
    pub results: Vec<EntryResult>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryResult {
    pub context: String,
    pub source: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EntryResult {
    pub fn ok(entry: &TranslationEntry) -> Self {
        Self {
            context: entry.context.clone(),
            source: entry.source.clone(),
            success: true,
            error: None,
        }
    }

    pub fn failed(entry: &TranslationEntry, error: impl Into<String>) -> Self {
        Self {
            context: entry.context.clone(),
            source: entry.source.clone(),
            success: false,
            error: Some(error.into()),
        }
    }
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
