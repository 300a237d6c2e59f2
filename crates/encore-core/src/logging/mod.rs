//! Logging setup.
//!
//! Console output through `tracing-subscriber` is always on and honours
//! `RUST_LOG`. Outside development, a [`JsonlLayer`] also appends every
//! event to `<data_dir>/logs/<date>.jsonl`.
//!
//! ```bash
//! # Failed activations from today's log
//! jq 'select(.target == "encore_core::checkout::flow" and .level == "warn")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogEntry;
pub use layer::JsonlLayer;

use std::path::{Path, PathBuf};

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Environment;
use crate::error::{EncoreError, EncoreResult};

const DEFAULT_FILTER: &str = "encore=info,encore_core=info,encore_ui=info";

/// Install the global subscriber. Returns the JSONL file path when file
/// instrumentation is active.
pub fn init(environment: Environment, data_dir: &Path) -> EncoreResult<Option<PathBuf>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let jsonl = jsonl_layer(environment, data_dir)?;
    let log_path = jsonl.as_ref().map(|layer| layer.log_path().to_path_buf());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(jsonl)
        .try_init()
        .map_err(|e| EncoreError::Logging(e.to_string()))?;

    Ok(log_path)
}

/// File instrumentation for `environment`: `None` in development, otherwise a
/// layer appending to `<data_dir>/logs/<date>.jsonl`.
pub fn jsonl_layer(environment: Environment, data_dir: &Path) -> EncoreResult<Option<JsonlLayer>> {
    if environment.is_development() {
        return Ok(None);
    }
    Ok(Some(JsonlLayer::new(data_dir.join("logs"))?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn development_skips_file_logging() {
        let temp = TempDir::new().unwrap();
        let layer = jsonl_layer(Environment::Development, temp.path()).unwrap();
        assert!(layer.is_none());
        assert!(!temp.path().join("logs").exists());
    }

    #[test]
    fn production_writes_dated_jsonl() {
        let temp = TempDir::new().unwrap();
        let layer = jsonl_layer(Environment::Production, temp.path())
            .unwrap()
            .expect("production installs the file layer");

        let path = layer.log_path();
        assert_eq!(path.parent(), Some(temp.path().join("logs").as_path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jsonl"));
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(path.file_stem().and_then(|s| s.to_str()), Some(date.as_str()));
        assert!(path.exists());
    }
}
