use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuddleError {
    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Project not initialized. Run 'huddle init' first.")]
    NotInitialized,

    #[error("No active session. Run 'huddle start' first.")]
    NoActiveSession,

    #[error("A session is already running (started {0}). Use --force to replace it.")]
    SessionActive(String),
}

pub type Result<T> = std::result::Result<T, HuddleError>;
