use std::process::ExitCode;

/// Exit status of a poglot invocation.
///
/// - `Success` (0): Command completed
/// - `Failure` (1): Command refused to act (e.g. config file already exists)
/// - `Error` (2): Command failed (bad root, unknown language or domain, broken catalog)
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
