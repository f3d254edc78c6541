use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit code of `tscat`.
///
/// Catalog problems never abort a run: a `.ts` file that cannot be read or
/// parsed becomes a `parse-error` issue like any other finding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// 0: no error-severity issue (warnings alone do not fail a run).
    Success,
    /// 1: `check` found error-severity issues, parse errors included, or
    /// `init` found an existing config.
    Failure,
    /// 2: the command could not run: bad `.tscatrc.json`, missing
    /// translations directory, unknown lookup locale, IO failure.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            Self::Failure
        } else {
            Self::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
