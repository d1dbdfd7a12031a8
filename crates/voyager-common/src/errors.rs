use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("credential error: {0}")]
    CredentialError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VoyagerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("lookup error: {0}")]
    Lookup(String),

    #[error("chat error: {0}")]
    Chat(String),
}
