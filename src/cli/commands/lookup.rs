use anyhow::{Result, bail};

use super::super::args::LookupCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, LookupSummary};
use crate::{
    core::{CheckContext, Translator},
    issues::Issue,
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let set = ctx.catalog_set();

    let Some(catalog) = set.catalog_for(&cmd.locale) else {
        bail!(
            "no catalog for locale '{}' in {}",
            cmd.locale,
            ctx.translations_dir.display()
        );
    };
    tracing::debug!("Locale {} served by {}", cmd.locale, catalog.file_path);

    let translator = Translator::from_catalog(catalog, ctx.lookup_options());
    let result = match cmd.count {
        Some(n) => translator.translate_plural(&cmd.context, &cmd.source, &cmd.comment, n),
        None => translator.translate(&cmd.context, &cmd.source, &cmd.comment),
    };

    let summary = LookupSummary {
        locale: translator.locale().to_string(),
        file_path: catalog.file_path.clone(),
        translated: result.is_translated(),
        text: result.into_text(),
        status: translator.status(&cmd.context, &cmd.source, &cmd.comment),
        references: translator
            .references(&cmd.context, &cmd.source, &cmd.comment)
            .to_vec(),
        show_refs: cmd.refs,
    };

    // Catalogs that failed to load are skipped with a warning.
    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Lookup(summary),
        issues,
        ctx.files_checked(),
        false,
    ))
}
