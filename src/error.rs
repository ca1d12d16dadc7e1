use thiserror::Error;

use crate::types::ProjectId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("project '{0}' not found")]
    ProjectNotFound(ProjectId),

    #[error("{0} already in progress")]
    OperationInProgress(String),

    #[error("{0}")]
    InitialLoad(String),

    #[error("invalid project: {0}")]
    Validation(String),

    #[error("{failed} of {total} operations failed")]
    OperationsFailed { failed: usize, total: usize },

    // Remote errors
    #[error("{message}")]
    Transport {
        operation: String,
        status: Option<u16>,
        message: String,
    },

    #[error("failed to decode {0} response: {1}")]
    Decode(String, String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CatalogError {
    /// True for failures reported by (or on the way to) the remote catalog
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CatalogError::Transport { .. } | CatalogError::Decode(..) | CatalogError::Http(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
