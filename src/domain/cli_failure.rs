//! Classification of bundle CLI failures from their stderr output.

/// Probable cause of a failed `bundle validate` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliFailureKind {
    ProfileNotFound,
    Authentication,
    /// `available` holds the text following `Available targets:` when the CLI printed it.
    TargetNotFound { available: Option<String> },
    Workspace,
    DashboardUnreadable,
    Unclassified,
}

/// What we could learn from a failed invocation's stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliFailure {
    pub kind: CliFailureKind,
    /// First stderr line starting with `Error:`.
    pub error_line: Option<String>,
}

impl CliFailure {
    pub fn from_stderr(stderr: &str) -> Self {
        let error_line = stderr
            .lines()
            .map(str::trim)
            .find(|line| line.starts_with("Error:"))
            .map(str::to_string);

        Self { kind: classify(stderr), error_line }
    }
}

fn classify(stderr: &str) -> CliFailureKind {
    let lower = stderr.to_lowercase();

    if lower.contains("no profile configured") || lower.contains("profile not found") {
        CliFailureKind::ProfileNotFound
    } else if lower.contains("cannot resolve bundle auth configuration") {
        CliFailureKind::Authentication
    } else if lower.contains("target")
        && (lower.contains("not found") || lower.contains("no such target"))
    {
        let available = stderr
            .rsplit_once("Available targets:")
            .map(|(_, rest)| rest.trim().to_string())
            .filter(|rest| !rest.is_empty());
        CliFailureKind::TargetNotFound { available }
    } else if lower.contains("workspace") && lower.contains("not found") {
        CliFailureKind::Workspace
    } else if lower.contains("failed to read serialized dashboard")
        || lower.contains("no such file or directory")
    {
        CliFailureKind::DashboardUnreadable
    } else {
        CliFailureKind::Unclassified
    }
}
