//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: one module per subcommand, each returning a [`CommandResult`]
//! - `actions`: catalog edits used by `clean`
//! - `report`: terminal output

pub mod actions;
pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs};
pub use commands::CommandResult;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(ExitStatus::from_result(&result))
}
