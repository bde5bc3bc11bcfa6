//! Reading dictionary source documents from disk.

use lexacon_tree::Entry;
use std::fs;
use std::path::Path;

use super::ConfigError;

/// Load a source document as an entry tree.
///
/// The format is chosen by extension: `.json` or `.toml`.
pub fn load_source(path: &Path) -> Result<Entry, ConfigError> {
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let value: serde_json::Value = match format.as_deref() {
        Some("json") => {
            let contents = fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        }
        Some("toml") => {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        }
        _ => {
            return Err(ConfigError::UnsupportedFormat(
                path.to_string_lossy().to_string(),
            ))
        }
    };

    tracing::debug!(path = %path.display(), "loaded dictionary source");
    Ok(Entry::from(value))
}
