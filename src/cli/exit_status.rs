use std::process::ExitCode;

/// Process exit status, following the usual convention for linter-style tools.
///
/// - `Success` (0): run completed, nothing to report
/// - `Failure` (1): run completed and found something (unused keys)
/// - `Error` (2): run aborted (bad config, malformed locale file, I/O error)
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
