use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Executable not found: {0}. Is the Claude CLI installed and on PATH?")]
    ExecutableNotFound(String),

    #[error("Working directory does not exist: {0}.")]
    MissingWorkingDir(String),

    #[error("Failed to spawn process: {0}.")]
    SpawnFailed(String),

    #[error("Launch script error: {0}.")]
    ScriptError(String),
}
