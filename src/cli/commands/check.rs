use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};
use crate::{
    core::CheckContext,
    issues::Rule,
    rules::{CATALOG_RULES, run_rules},
};

/// Rules selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    Vanished,
    PlaceholderMismatch,
    NumerusForms,
    DuplicateMessage,
    OutOfSync,
    EmptyTranslation,
    MissingLanguage,
}

impl From<CheckRule> for Rule {
    fn from(rule: CheckRule) -> Self {
        match rule {
            CheckRule::Unfinished => Rule::Unfinished,
            CheckRule::Vanished => Rule::Vanished,
            CheckRule::PlaceholderMismatch => Rule::PlaceholderMismatch,
            CheckRule::NumerusForms => Rule::NumerusForms,
            CheckRule::DuplicateMessage => Rule::DuplicateMessage,
            CheckRule::OutOfSync => Rule::OutOfSync,
            CheckRule::EmptyTranslation => Rule::EmptyTranslation,
            CheckRule::MissingLanguage => Rule::MissingLanguage,
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let rules: Vec<Rule> = if cmd.checks.is_empty() {
        CATALOG_RULES.to_vec()
    } else {
        let mut rules: Vec<Rule> = cmd.checks.iter().copied().map(Rule::from).collect();
        rules.sort();
        rules.dedup();
        rules
    };
    tracing::debug!("Running rules: {:?}", rules);

    let issues = run_rules(&ctx, &rules);

    Ok(finish(
        CommandSummary::Check,
        issues,
        ctx.files_checked(),
        true,
    ))
}
