use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Parse error: {0}.")]
    ParseError(String),

    #[error("Unsupported profile format: {0}.")]
    UnsupportedFormat(String),

    #[error("Session not found: {0}.")]
    SessionNotFound(String),

    #[error("No sessions defined in {0}.")]
    NoSessions(String),

    #[error("Invalid profile argument: {0}.")]
    InvalidArgument(String),
}
