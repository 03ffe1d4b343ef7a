use std::process::ExitCode;

/// Process exit status, as CI jobs read it.
///
/// - `Success` (0): catalogs are in sync, or the export was written
/// - `Failure` (1): missing or unused translations found, or the export failed
/// - `Error` (2): the run could not start (invalid configuration, missing root)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
