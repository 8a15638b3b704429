use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::Metadata;

pub const DEFAULT_OUTPUT_PATH: &str = "jesters.yaml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

pub fn encode(metadata: &Metadata, format: Format) -> Result<String> {
    let text = match format {
        Format::Yaml => serde_yaml::to_string(metadata)?,
        Format::Json => {
            let mut json = serde_json::to_string_pretty(metadata)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

/// Encode and write the record, replacing any existing file.
pub fn write_metadata(path: &Path, metadata: &Metadata, format: Format) -> Result<()> {
    let text = encode(metadata, format)?;
    std::fs::write(path, &text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

// ── Tests ──
