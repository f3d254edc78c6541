use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use super::helpers::{
    apply_entry, issue_item, issue_locales, json_result, load_context, locale_matches,
    locales_by_file, page_bounds, paginate, parse_rule,
};
use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, EntryResult, FileError,
    GetCatalogsParams, GetConfigParams, GetStatsParams, IssueItem, IssuesScanResult,
    ReferenceItem, RuleStats, ScanIssuesParams, ScanOverviewParams, ScanOverviewResult,
    SetTranslationsParams, SetTranslationsResult, StatsResult, TranslateParams, TranslateResult,
};
use crate::{
    config::load_config,
    core::{MessageKey, PluralRule, Translator, catalog_stats, save_catalog},
    issues::Severity,
    rules::{CATALOG_RULES, run_rules},
};

#[derive(Clone)]
pub struct TscatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TscatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TscatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tscat configuration
    #[tool(description = "Get the current tscat configuration (.tscatrc.json or defaults).")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file(),
            config_path: result.path.map(|p| p.to_string_lossy().to_string()),
            config: ConfigValues::from(result.config),
        })
    }

    /// List the .ts catalogs of the project
    #[tool(
        description = "List the Qt Linguist .ts catalogs of the project with their locale and message counts."
    )]
    pub async fn get_catalogs(
        &self,
        params: Parameters<GetCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        tracing::debug!("get_catalogs: {} file(s)", ctx.files_checked());

        let catalogs = ctx
            .catalogs()
            .map(|catalog| CatalogInfo {
                locale: catalog.locale(),
                file_path: catalog.file_path.clone(),
                source_language: catalog.source_language.clone(),
                context_count: catalog.contexts.len(),
                message_count: catalog.message_count(),
            })
            .collect();

        let parse_errors = ctx
            .parse_errors()
            .iter()
            .map(|e| FileError {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect();

        json_result(&CatalogsResult {
            translations_dir: ctx.translations_dir.to_string_lossy().to_string(),
            catalogs,
            parse_errors,
        })
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get issue counts per rule without detailed items. Use this first to understand the overall state before diving into details with scan_issues."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let issues = run_rules(&ctx, CATALOG_RULES);
        let locales = locales_by_file(&ctx);

        let mut by_rule: BTreeMap<String, (Severity, usize, BTreeSet<String>)> = BTreeMap::new();
        for issue in &issues {
            let entry = by_rule
                .entry(issue.rule().to_string())
                .or_insert_with(|| (issue.severity(), 0, BTreeSet::new()));
            entry.1 += 1;
            entry.2.extend(issue_locales(issue, &locales));
        }

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        json_result(&ScanOverviewResult {
            files_checked: ctx.files_checked(),
            total_count: issues.len(),
            error_count,
            warning_count: issues.len() - error_count,
            rules: by_rule
                .into_iter()
                .map(|(rule, (severity, total_count, affected))| RuleStats {
                    rule,
                    severity: severity.to_string(),
                    total_count,
                    affected_locales: affected.into_iter().collect(),
                })
                .collect(),
        })
    }

    /// Scan catalog issues with optional rule/locale filters
    #[tool(
        description = "List catalog issues (unfinished, vanished, placeholder-mismatch, numerus-forms, duplicate-message, out-of-sync, empty-translation, missing-language, parse-error). Filter by rule and locale. Returns a paginated list."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (limit, offset) = page_bounds(params.limit, params.offset);

        let rule_filter = params
            .rule
            .as_deref()
            .map(|name| {
                parse_rule(name).ok_or_else(|| {
                    McpError::invalid_params(format!("Unknown rule '{}'", name), None)
                })
            })
            .transpose()?;
        let rules = match rule_filter {
            Some(rule) => vec![rule],
            None => CATALOG_RULES.to_vec(),
        };

        let ctx = load_context(&params.project_root_path)?;
        let locales = locales_by_file(&ctx);

        let items: Vec<IssueItem> = run_rules(&ctx, &rules)
            .iter()
            .filter(|issue| rule_filter.is_none_or(|rule| issue.rule() == rule))
            .filter_map(|issue| {
                let issue_locales = issue_locales(issue, &locales);
                if let Some(wanted) = params.locale.as_deref()
                    && !issue_locales.iter().any(|l| locale_matches(wanted, l))
                {
                    return None;
                }
                Some(issue_item(issue, issue_locales))
            })
            .collect();

        let total_count = items.len();
        let (items, pagination) = paginate(items, limit, offset);

        json_result(&IssuesScanResult {
            total_count,
            items,
            pagination,
        })
    }

    /// Get translation progress per catalog
    #[tool(description = "Get translation progress (finished/unfinished/vanished counts) per catalog.")]
    pub async fn get_stats(
        &self,
        params: Parameters<GetStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        json_result(&StatsResult {
            catalogs: ctx.catalogs().map(catalog_stats).map(Into::into).collect(),
        })
    }

    /// Look up a translation the way the Qt runtime would
    #[tool(
        description = "Translate a source string for a locale the way the Qt runtime would, including plural form selection when count is given. Falls back to the source text."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;
        let set = ctx.catalog_set();

        let catalog = set.catalog_for(&params.locale).ok_or_else(|| {
            McpError::invalid_params(
                format!("No catalog for locale '{}'", params.locale),
                None,
            )
        })?;

        let translator = Translator::from_catalog(catalog, ctx.lookup_options());
        let comment = params.comment.as_deref().unwrap_or_default();
        let lookup = match params.count {
            Some(n) => translator.translate_plural(&params.context, &params.source, comment, n),
            None => translator.translate(&params.context, &params.source, comment),
        };

        json_result(&TranslateResult {
            locale: translator.locale().to_string(),
            file_path: catalog.file_path.clone(),
            translated: lookup.is_translated(),
            text: lookup.into_text(),
            status: translator
                .status(&params.context, &params.source, comment)
                .map(|s| s.to_string()),
            references: translator
                .references(&params.context, &params.source, comment)
                .iter()
                .map(ReferenceItem::from)
                .collect(),
        })
    }

    /// Write translations into a catalog and mark them finished
    #[tool(
        description = "Write translations for existing messages of one locale's catalog and mark them finished. Numerus messages take 'forms' with one entry per plural form of the locale."
    )]
    pub async fn set_translations(
        &self,
        params: Parameters<SetTranslationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        if params.translations.is_empty() {
            return Err(McpError::invalid_params(
                "translations array cannot be empty",
                None,
            ));
        }

        let mut ctx = load_context(&params.project_root_path)?;
        let file_path = ctx
            .catalog_set()
            .catalog_for(&params.locale)
            .map(|c| c.file_path.clone())
            .ok_or_else(|| {
                McpError::invalid_params(
                    format!("No catalog for locale '{}'", params.locale),
                    None,
                )
            })?;

        let loaded = ctx
            .loaded_mut()
            .iter_mut()
            .find(|l| l.catalog.file_path == file_path)
            .ok_or_else(|| {
                McpError::internal_error(format!("Catalog {} is not loaded", file_path), None)
            })?;

        let locale = loaded.catalog.locale();
        let rule = PluralRule::for_locale(&locale);

        let mut results = Vec::with_capacity(params.translations.len());
        for entry in &params.translations {
            let key = MessageKey::new(
                entry.context.as_str(),
                entry.source.as_str(),
                entry.comment.as_deref().unwrap_or_default(),
            );
            let outcome = match loaded.catalog.find_message_mut(&key) {
                Some(message) => apply_entry(message, entry, rule),
                None => Err(format!("message {} not found", key)),
            };
            results.push(match outcome {
                Ok(()) => EntryResult::ok(entry),
                Err(error) => EntryResult::failed(entry, error),
            });
        }

        let updated_count = results.iter().filter(|r| r.success).count();
        let failed_count = results.len() - updated_count;

        if updated_count > 0 {
            save_catalog(&loaded.catalog).map_err(|e| {
                McpError::internal_error(format!("Failed to write {}: {:#}", file_path, e), None)
            })?;
        }
        tracing::info!(
            "set_translations: {} updated, {} failed in {}",
            updated_count,
            failed_count,
            file_path
        );

        json_result(&SetTranslationsResult {
            success: failed_count == 0,
            locale,
            file_path,
            updated_count,
            failed_count,
            results,
        })
    }
}

#[tool_handler]
impl ServerHandler for TscatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tscat MCP helps AI agents maintain Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_catalogs - List catalogs with locale and message counts\n\
                 3. scan_overview - Issue counts per rule\n\
                 4. scan_issues - Detailed issue list (filter by rule/locale, paginated)\n\
                 5. get_stats - Translation progress per catalog\n\
                 6. translate - Look up a translation like the Qt runtime\n\
                 7. set_translations - Write translations and mark them finished\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix placeholder-mismatch and numerus-forms errors first; they break the UI\n\
                 3. Translate unfinished messages with set_translations\n\
                 4. Re-run scan_issues to confirm the catalogs are clean"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing::info!("Starting MCP server on stdio");
            let service = TscatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
