use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
