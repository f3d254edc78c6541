use crate::{
    core::{CatalogStats, SourceRef, TranslationStatus},
    issues::{Issue, VanishedIssue},
};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Clean(CleanSummary),
    Stats(StatsSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CleanSummary {
    pub vanished_count: usize,
    pub obsolete_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    /// Messages actually removed (apply mode only).
    pub removed_count: usize,
    /// Contexts dropped because no message was left (apply mode only).
    pub contexts_removed: usize,
    /// Messages no longer found when applying (apply mode only).
    pub skipped_count: usize,
    pub issues: Vec<VanishedIssue>,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
    pub json: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Locale of the catalog that answered.
    pub locale: String,
    pub file_path: String,
    pub text: String,
    pub translated: bool,
    pub status: Option<TranslationStatus>,
    pub references: Vec<SourceRef>,
    pub show_refs: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tscat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (dry-run and informational commands).
    pub exit_on_errors: bool,
    /// Issues found by the command. Only parse errors for
    /// clean/stats/lookup, empty for init.
    pub issues: Vec<Issue>,
    /// Number of `.ts` files that were loaded.
    pub files_checked: usize,
}
