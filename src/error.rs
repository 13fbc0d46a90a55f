use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenagerieError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Schema parse error: {0}")]
    SchemaParse(String),

    #[error("Schema contract violation: {0}")]
    Contract(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MenagerieError>;
