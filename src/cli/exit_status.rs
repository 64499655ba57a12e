use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed (including the "no comments found" early exit)
/// - `Error` (2): Command failed due to an error (missing source dir, bad version string, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
