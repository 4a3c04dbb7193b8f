use thiserror::Error;

/// Failures terminal for an installation run. Detection and verification
/// problems are absorbed into booleans elsewhere and never reach this type.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("{0}")]
    Prerequisite(String),

    #[error("failed to download installer: {0}")]
    Download(String),

    #[error("installer failed: {0}")]
    InstallerExit(String),
}
