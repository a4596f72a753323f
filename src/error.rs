use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog ({origin}): {source}")]
    CatalogFormat {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed config {path}: {source}")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Chat '{0}' not found")]
    UnknownChat(String),

    #[error("Message content is empty")]
    EmptyMessage,

    #[error("Unknown collection '{0}'. Available: jobs, companies, courses, chats, events, interviews, questions")]
    UnknownCollection(String),
}

pub type Result<T, E = PlacementError> = std::result::Result<T, E>;
