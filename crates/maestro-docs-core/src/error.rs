use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("section not found: {0}")]
    SectionNotFound(String),

    #[error("invalid anchor '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidAnchor(String),

    #[error("duplicate anchor: {0}")]
    DuplicateAnchor(String),

    #[error("command not found on PATH: {0}")]
    CommandNotFound(String),

    #[error("dependency install failed with exit code {0}")]
    InstallFailed(i32),

    #[error("failed to launch '{command}': {reason}")]
    LaunchFailed { command: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocsError>;
