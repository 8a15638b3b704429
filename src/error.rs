use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Retrieval failures and serialization failures both abort the run.
#[derive(Debug, Error)]
pub enum Error {
    // ── retrieval ──
    #[error("failed to download {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("cannot read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document from {origin} is empty")]
    EmptyDocument { origin: String },

    // ── serialization ──
    #[error("failed to encode metadata as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to encode metadata as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
