//! Issue types for catalog analysis results.
//!
//! Each issue is self-contained with everything the reporters (CLI and MCP)
//! need to display it.

use enum_dispatch::enum_dispatch;

use crate::core::{MessageSite, TranslationStatus};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Unfinished,
    Vanished,
    PlaceholderMismatch,
    NumerusForms,
    DuplicateMessage,
    OutOfSync,
    EmptyTranslation,
    MissingLanguage,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Vanished => write!(f, "vanished"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::NumerusForms => write!(f, "numerus-forms"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::OutOfSync => write!(f, "out-of-sync"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::MissingLanguage => write!(f, "missing-language"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Messages (MessageSite)
// ============================================================

/// Live message whose translation is still marked unfinished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub site: MessageSite,
    pub locale: String,
    /// True when the unfinished translation has no text at all.
    pub empty: bool,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Message kept in the catalog although its source string is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanishedIssue {
    pub site: MessageSite,
    /// `Vanished` or `Obsolete`.
    pub status: TranslationStatus,
}

impl VanishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Vanished
    }
}

/// Translation whose `%N` / `%n` markers differ from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub site: MessageSite,
    pub locale: String,
    /// Markers in the source string, sorted.
    pub expected: Vec<String>,
    /// Markers in the translation, sorted.
    pub found: Vec<String>,
    /// Plural form index for numerus messages.
    pub form: Option<usize>,
    pub translation: String,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Numerus translation with the wrong number of plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusFormsIssue {
    pub site: MessageSite,
    pub locale: String,
    pub expected: usize,
    pub actual: usize,
}

impl NumerusFormsIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NumerusForms
    }
}

/// Same `(context, source, comment)` defined twice in one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub site: MessageSite,
    /// Line of the first definition.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// Message present in some catalogs but missing from others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfSyncIssue {
    pub site: MessageSite,
    /// Locales that lack the message.
    pub missing_in: Vec<String>,
}

impl OutOfSyncIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OutOfSync
    }
}

/// Translation marked finished but with no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub site: MessageSite,
    pub locale: String,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

// ============================================================
// Issue Types - Files
// ============================================================

/// `<TS>` root without a `language` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLanguageIssue {
    pub file_path: String,
    /// Locale derived from the file name.
    pub suggested: String,
}

impl MissingLanguageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingLanguage
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    Vanished(VanishedIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    NumerusForms(NumerusFormsIssue),
    DuplicateMessage(DuplicateMessageIssue),
    OutOfSync(OutOfSyncIssue),
    EmptyTranslation(EmptyTranslationIssue),
    MissingLanguage(MissingLanguageIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(site) => site.file_path(),
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog (has the `.ts` line for the excerpt).
    Message(&'a MessageSite),
    /// File-level only.
    File { path: &'a str },
}

/// Trait for types that can be reported.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

fn message_label(site: &MessageSite) -> String {
    format!("{}::{}", site.context, site.source)
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        message_label(&self.site)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.empty {
            Some(format!("not translated in {}", self.locale))
        } else {
            Some(format!("translation in {} needs review", self.locale))
        }
    }
}

impl Report for VanishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        message_label(&self.site)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("marked {}", self.status))
    }

    fn hint(&self) -> Option<String> {
        Some("run `tscat clean --apply` to remove it".to_string())
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        message_label(&self.site)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let form = self
            .form
            .map(|i| format!(" (form {})", i))
            .unwrap_or_default();
        Some(format!(
            "expected [{}], found [{}] in {}{}: \"{}\"",
            self.expected.join(", "),
            self.found.join(", "),
            self.locale,
            form,
            self.translation
        ))
    }
}

impl Report for NumerusFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        message_label(&self.site)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} expects {} plural form(s), found {}",
            self.locale, self.expected, self.actual
        ))
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        message_label(&self.site)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("first defined at line {}", self.first_line))
    }
}

impl Report for OutOfSyncIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        message_label(&self.site)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in: {}", self.missing_in.join(", ")))
    }

    fn hint(&self) -> Option<String> {
        Some("run lupdate to regenerate the catalogs".to_string())
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        message_label(&self.site)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("finished translation in {} is empty", self.locale))
    }
}

impl Report for MissingLanguageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        "<TS> has no language attribute".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!("add language=\"{}\"", self.suggested))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(site) => site.line(),
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Message(site) => site.col(),
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, message, rule
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.message().cmp(&other.message()))
            .then_with(|| self.rule().cmp(&other.rule()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
