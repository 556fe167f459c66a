//! One full build: resolve the entry document, write the output, copy
//! static assets.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::error::StitchResult;
use crate::fs::{atomic_write, copy_if_exists, ensure_dir};
use crate::resolver::resolve;

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    /// Size of the written output in bytes
    pub bytes: u64,
    /// Number of include markers substituted
    pub includes: usize,
    /// Static assets copied into the output root
    pub assets: Vec<PathBuf>,
}

impl BuildReport {
    pub fn size_kb(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Build `config.output` from `config.entry`.
///
/// Nothing is written when resolution fails.
pub fn build(config: &BuildConfig) -> StitchResult<BuildReport> {
    let resolved = resolve(config)?;

    ensure_dir(&config.output_root)?;
    atomic_write(&config.output, resolved.content.as_bytes())?;

    let mut assets = Vec::new();
    for asset in &config.static_files {
        if copy_if_exists(asset, &config.output_root)? {
            assets.push(asset.clone());
        }
    }

    Ok(BuildReport {
        output: config.output.clone(),
        bytes: resolved.content.len() as u64,
        includes: resolved.includes.len(),
        assets,
    })
}
