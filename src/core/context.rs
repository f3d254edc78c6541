use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        data::{Catalog, Context, Message, MessageLocation, MessageSite},
        file_scanner::scan_catalog_files,
        parsers::parse_catalog,
        translator::{CatalogSet, LookupOptions},
    },
    issues::ParseErrorIssue,
};

/// A parsed catalog together with its raw text (for report excerpts).
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    content: String,
}

impl LoadedCatalog {
    pub fn new(catalog: Catalog, content: String) -> Self {
        Self { catalog, content }
    }

    /// 1-based line of the raw `.ts` file.
    pub fn source_line(&self, line: usize) -> Option<String> {
        line.checked_sub(1)
            .and_then(|i| self.content.lines().nth(i))
            .map(str::to_string)
    }

    /// Report site for a message of this catalog.
    pub fn site(&self, context: &Context, message: &Message) -> MessageSite {
        let location = MessageLocation::new(
            self.catalog.file_path.clone(),
            message.line,
            message.col.max(1),
        );
        MessageSite::new(location, context.name.clone(), message.source.clone())
            .with_source_line(self.source_line(message.line))
    }
}

/// Loaded project state shared by the rules, the CLI commands and the MCP
/// tools.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--translations-root`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Resolved directory the catalogs were discovered in.
    pub translations_dir: PathBuf,

    /// Whether `-v` was given.
    pub verbose: bool,

    /// Successfully parsed catalogs, sorted by file path.
    catalogs: Vec<LoadedCatalog>,

    /// Files that could not be read or parsed.
    parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Load configuration, discover `.ts` files and parse them.
    ///
    /// Unreadable or malformed catalogs become parse-error issues; a missing
    /// translations directory is an error.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        match &config_result.path {
            Some(path) => tracing::debug!("Using config {}", path.display()),
            None => tracing::debug!("No .tscatrc.json found, using default configuration"),
        }

        let mut config = config_result.config;
        if let Some(ref translations_root) = common_args.translations_root {
            config.translations_root = translations_root.to_string_lossy().to_string();
        }

        let translations_dir = resolve_dir(&root_dir, &config.translations_root);
        if !translations_dir.is_dir() {
            bail!(
                "Translations directory not found: {}",
                translations_dir.display()
            );
        }

        let scan = scan_catalog_files(&translations_dir, &config.ignores);
        if scan.skipped_count > 0 {
            tracing::warn!(
                "{} path(s) skipped due to access errors",
                scan.skipped_count
            );
        }
        tracing::debug!(
            "Found {} catalog(s) in {}",
            scan.files.len(),
            translations_dir.display()
        );

        let (catalogs, parse_errors) = load_catalogs(&scan.files);

        Ok(Self {
            config,
            root_dir,
            translations_dir,
            verbose: common_args.verbose,
            catalogs,
            parse_errors,
        })
    }

    pub fn loaded(&self) -> &[LoadedCatalog] {
        &self.catalogs
    }

    pub fn loaded_mut(&mut self) -> &mut [LoadedCatalog] {
        &mut self.catalogs
    }

    pub fn catalogs(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.iter().map(|l| &l.catalog)
    }

    /// Number of `.ts` files found, including the ones that failed to parse.
    pub fn files_checked(&self) -> usize {
        self.catalogs.len() + self.parse_errors.len()
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parse_errors
    }

    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            include_unfinished: self.config.include_unfinished,
        }
    }

    pub fn catalog_set(&self) -> CatalogSet {
        CatalogSet::new(self.catalogs().cloned().collect(), self.lookup_options())
    }
}

/// Resolve a configured directory against the project root.
fn resolve_dir(root_dir: &Path, dir: &str) -> PathBuf {
    let p = Path::new(dir);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}

/// Read and parse catalogs in parallel.
fn load_catalogs(files: &[String]) -> (Vec<LoadedCatalog>, Vec<ParseErrorIssue>) {
    let results: Vec<_> = files
        .par_iter()
        .map(|file_path| {
            let result = std::fs::read_to_string(file_path)
                .map_err(|e| format!("{}: failed to read file: {}", file_path, e))
                .and_then(|content| {
                    parse_catalog(&content, file_path)
                        .map(|catalog| LoadedCatalog::new(catalog, content))
                        .map_err(|e| e.to_string())
                });
            (file_path.clone(), result)
        })
        .collect();

    let mut catalogs = Vec::new();
    let mut errors = Vec::new();

    for (file_path, result) in results {
        match result {
            Ok(loaded) => catalogs.push(loaded),
            Err(error) => {
                tracing::debug!("Skipping catalog: {}", error);
                errors.push(ParseErrorIssue { file_path, error });
            }
        }
    }

    (catalogs, errors)
}
