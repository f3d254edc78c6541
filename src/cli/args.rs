//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog rules and report issues
//! - `clean`: Remove vanished/obsolete messages from catalogs
//! - `stats`: Print translation progress per catalog
//! - `lookup`: Translate a source string the way the runtime would
//! - `init`: Create a `.tscatrc.json` configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory containing the .ts catalogs (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Project root where .tscatrc.json is searched (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CleanRule {
    Vanished,
    Obsolete,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually remove messages (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Message kinds to remove (default: all)
    /// Can be specified multiple times: --rules vanished --rules obsolete
    #[arg(long, value_enum)]
    pub rules: Vec<CleanRule>,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Source string to translate
    pub source: String,

    /// Target locale (e.g. ko, ko_KR, pt-BR)
    #[arg(long, short)]
    pub locale: String,

    /// Context name (e.g. the UI class)
    #[arg(long, short)]
    pub context: String,

    /// Disambiguation comment
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Count for numerus messages
    #[arg(short = 'n', long = "count", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Also print the source locations of the message
    #[arg(long)]
    pub refs: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for unfinished, vanished and inconsistent translations
    Check(CheckCommand),
    /// Remove vanished or obsolete messages from catalogs
    Clean(CleanCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Look up the translation of a source string
    Lookup(LookupCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
