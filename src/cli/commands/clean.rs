use std::collections::HashSet;

use anyhow::Result;

use super::super::{
    actions::{Action, RemoveMessage},
    args::{CleanCommand, CleanRule},
};
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, TranslationStatus},
    issues::{Issue, VanishedIssue},
    rules::vanished::check_vanished_issues,
};

impl CleanRule {
    pub fn all() -> HashSet<Self> {
        [Self::Vanished, Self::Obsolete].into_iter().collect()
    }

    fn matches(self, status: TranslationStatus) -> bool {
        match self {
            CleanRule::Vanished => status == TranslationStatus::Vanished,
            CleanRule::Obsolete => status == TranslationStatus::Obsolete,
        }
    }
}

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let mut ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let rules = if cmd.rules.is_empty() {
        CleanRule::all()
    } else {
        cmd.rules.iter().copied().collect()
    };

    let issues: Vec<VanishedIssue> = check_vanished_issues(&ctx)
        .into_iter()
        .filter(|issue| rules.iter().any(|rule| rule.matches(issue.status)))
        .collect();

    let vanished_count = issues
        .iter()
        .filter(|i| i.status == TranslationStatus::Vanished)
        .count();
    let obsolete_count = issues.len() - vanished_count;

    let (file_count, removed_count, contexts_removed, skipped_count) =
        if apply && !issues.is_empty() {
            let stats = RemoveMessage::run(&issues, ctx.loaded_mut())?;
            (
                stats.files_modified,
                stats.changes_applied,
                stats.contexts_removed,
                stats.skipped,
            )
        } else {
            let files: HashSet<&str> = issues.iter().map(|i| i.site.file_path()).collect();
            (files.len(), 0, 0, 0)
        };

    let all_issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            vanished_count,
            obsolete_count,
            file_count,
            is_apply: apply,
            removed_count,
            contexts_removed,
            skipped_count,
            issues,
        }),
        all_issues,
        ctx.files_checked(),
        false,
    ))
}
