use std::path::Path;

use anyhow::Context;
use log::info;
use stockchart::{parse_dataset, Dataset};

/// Reads a Twelve Data batch snapshot and returns the requested symbols,
/// normalized to oldest first.
pub async fn load_dataset<S: AsRef<str>>(
    path: impl AsRef<Path>,
    symbols: &[S],
) -> anyhow::Result<Dataset> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    info!("loaded {} bytes from {}", bytes.len(), path.display());

    let ds = parse_dataset(&bytes, symbols)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(ds.normalized())
}
