use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::{Error, Result};

/// README of the community mod list.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/jie65535/awesome-balatro/refs/heads/main/README.md";

/// Download the document body. Any transport error or non-success status is fatal.
pub async fn fetch_document(url: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Downloading {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));

    info!("Fetching document: {}", url);
    let body = download(&client, url).await;
    pb.finish_and_clear();

    let body = body.map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;
    info!("Fetched {} bytes", body.len());
    non_empty(body, url)
}

async fn download(client: &reqwest::Client, url: &str) -> reqwest::Result<String> {
    client.get(url).send().await?.error_for_status()?.text().await
}

/// Read a local copy of the document instead of downloading it.
pub fn read_document(path: &Path) -> Result<String> {
    let body = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Read {} bytes from {}", body.len(), path.display());
    non_empty(body, &path.display().to_string())
}

fn non_empty(body: String, origin: &str) -> Result<String> {
    if body.trim().is_empty() {
        return Err(Error::EmptyDocument {
            origin: origin.to_string(),
        });
    }
    Ok(body)
}

// ── Tests ──
