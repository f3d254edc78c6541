//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tscat to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    actions::{Action, RemoveMessage},
    commands::{
        CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary, StatsSummary,
    },
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{CatalogStats, TranslationStatus};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// This is the main entry point for reporting. Issues are sorted and
/// displayed with severity, location, the `.ts` excerpt, and details.
///
/// # Example
///
/// ```ignore
/// use tscat::cli::report::report;
///
/// let issues = tscat::rules::run_rules(&ctx, tscat::rules::CATALOG_RULES);
/// report(&issues);
/// ```
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files_checked: usize) {
    print_success_to(files_checked, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files_checked: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} catalog {} - no issues found",
        files_checked,
        if files_checked == 1 { "file" } else { "files" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print one warning per catalog that could not be loaded. `check` reports
/// these as issues instead.
pub fn print_parse_warnings(issues: &[Issue]) {
    print_parse_warnings_to(issues, &mut io::stderr().lock());
}

/// Print parse warnings to a custom writer.
pub fn print_parse_warnings_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        if let Issue::ParseError(parse_error) = issue {
            let _ = writeln!(
                writer,
                "{} skipped {}",
                "warning:".bold().yellow(),
                parse_error.error
            );
        }
    }
}

// ============================================================
// Issues
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match loc {
        ReportLocation::Message(site) => {
            let (line, col) = (site.line(), site.col());
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                site.file_path(),
                line,
                col
            );
            if let Some(source_line) = &site.source_line {
                print_excerpt(writer, source_line, line, col, severity, max_line_width);
            }
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_excerpt<W: Write>(
    writer: &mut W,
    source_line: &str,
    line: usize,
    col: usize,
    severity: Severity,
    max_line_width: usize,
) {
    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // col is 1-based
    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 { "problem" } else { "problems" },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(site) => Some(site.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command output
// ============================================================

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.files_checked);
            }
            return;
        }
        CommandSummary::Clean(summary) => print_clean(summary),
        CommandSummary::Stats(summary) => {
            print_stats_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Lookup(summary) => {
            print_lookup_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warnings(&result.issues);
}

fn print_clean(summary: &CleanSummary) {
    let total = summary.vanished_count + summary.obsolete_count;
    if total == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No vanished or obsolete messages found".green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} message(s) from {} file(s).",
            "Removed".green().bold(),
            summary.removed_count,
            summary.file_count
        );
        if summary.contexts_removed > 0 {
            println!(
                "  - dropped {} empty context(s)",
                summary.contexts_removed
            );
        }
        if summary.skipped_count > 0 {
            println!(
                "  - skipped {} message(s) no longer in the catalog",
                summary.skipped_count
            );
        }
    } else {
        RemoveMessage::preview(&summary.issues);
        println!(
            "{} {} message(s) in {} file(s):",
            "Would remove".yellow().bold(),
            total,
            summary.file_count
        );
        if summary.vanished_count > 0 {
            println!("  - vanished: {}", summary.vanished_count);
        }
        if summary.obsolete_count > 0 {
            println!("  - obsolete: {}", summary.obsolete_count);
        }
        println!("Run with {} to remove these messages.", "--apply".cyan());
    }
}

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.json {
        match serde_json::to_string_pretty(&summary.catalogs) {
            Ok(json) => {
                let _ = writeln!(writer, "{}", json);
            }
            Err(err) => eprintln!("Error: {}", err),
        }
        return;
    }

    if summary.catalogs.is_empty() {
        let _ = writeln!(writer, "No catalogs found.");
        return;
    }

    let headers = ["Locale", "File", "Done", "Unfinished", "Vanished", "%"];
    let rows: Vec<[String; 6]> = summary.catalogs.iter().map(stats_row).collect();

    let mut widths = headers.map(|h| UnicodeWidthStr::width(h));
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header_line = format_row(&headers.map(str::to_string), &widths);
    let _ = writeln!(writer, "{}", header_line.bold());
    for (row, stats) in rows.iter().zip(&summary.catalogs) {
        let line = format_row(row, &widths);
        let line = if stats.percent == 100 {
            line.green()
        } else if stats.percent >= 80 {
            line.normal()
        } else {
            line.yellow()
        };
        let _ = writeln!(writer, "{}", line);
    }
}

fn stats_row(stats: &CatalogStats) -> [String; 6] {
    [
        stats.locale.clone(),
        stats.file_path.clone(),
        format!("{}/{}", stats.finished, stats.total),
        stats.unfinished.to_string(),
        stats.vanished.to_string(),
        stats.percent.to_string(),
    ]
}

/// Text columns are left aligned, numbers right aligned.
fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let pad = width.saturating_sub(UnicodeWidthStr::width(cell.as_str()));
            if i < 2 {
                format!("{}{}", cell, " ".repeat(pad))
            } else {
                format!("{}{}", " ".repeat(pad), cell)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn print_lookup_to<W: Write, E: Write>(summary: &LookupSummary, out: &mut W, err: &mut E) {
    let _ = writeln!(out, "{}", summary.text);

    if !summary.translated {
        let _ = writeln!(
            err,
            "{} no translation in {} ({}), showing source text",
            "note:".bold(),
            summary.locale,
            summary.file_path
        );
    } else if summary.status == Some(TranslationStatus::Unfinished) {
        let _ = writeln!(
            err,
            "{} translation in {} is unfinished",
            "note:".bold(),
            summary.locale
        );
    }

    if summary.show_refs {
        if summary.references.is_empty() {
            let _ = writeln!(out, "  {} {}", "=".blue(), "(no locations)".dimmed());
        }
        for reference in &summary.references {
            match reference.line {
                Some(line) => {
                    let _ = writeln!(out, "  {} {}:{}", "-->".blue(), reference.file, line);
                }
                None => {
                    let _ = writeln!(out, "  {} {}", "-->".blue(), reference.file);
                }
            }
        }
    }
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
