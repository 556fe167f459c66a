//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Source root, relative to the project root
pub const SOURCE_DIR: &str = "src";
/// Entry document, relative to the source root
pub const ENTRY_FILE: &str = "index.html";
/// Output root, relative to the project root
pub const DIST_DIR: &str = "dist";
/// Output document, relative to the output root
pub const OUTPUT_FILE: &str = "index.html";
/// Optional tunables file, relative to the project root
pub const CONFIG_FILE: &str = "stitch.toml";
/// Floor for the watch poll interval; shorter values are raised to it
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

/// `[build]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSection {
    /// Project-root files copied verbatim into the output root
    #[serde(default = "default_static_files")]
    pub static_files: Vec<String>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            static_files: default_static_files(),
        }
    }
}

fn default_static_files() -> Vec<String> {
    vec!["config.js".to_string(), "icon.png".to_string()]
}

/// `[watch]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// File extensions (without the dot) tracked by the watch loop
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            extensions: default_extensions(),
        }
    }
}

fn default_interval_ms() -> u64 {
    500
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string()]
}

/// Contents of `stitch.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub watch: WatchSection,
}

/// Resolved paths and tunables for one project.
///
/// The layout (`src/index.html` in, `dist/index.html` out) is fixed; only
/// the tunables from [`Config`] vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub project_root: PathBuf,
    pub source_root: PathBuf,
    pub entry: PathBuf,
    pub output_root: PathBuf,
    pub output: PathBuf,
    pub static_files: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub poll_interval: Duration,
}

impl BuildConfig {
    /// Layout rooted at `project_root` with default tunables
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::from_config(project_root, &Config::default())
    }

    pub fn from_config(project_root: impl Into<PathBuf>, config: &Config) -> Self {
        let project_root = project_root.into();
        let source_root = project_root.join(SOURCE_DIR);
        let output_root = project_root.join(DIST_DIR);
        let interval_ms = config.watch.interval_ms.max(MIN_POLL_INTERVAL_MS);

        Self {
            entry: source_root.join(ENTRY_FILE),
            output: output_root.join(OUTPUT_FILE),
            static_files: config
                .build
                .static_files
                .iter()
                .map(|f| project_root.join(f))
                .collect(),
            extensions: config.watch.extensions.clone(),
            poll_interval: Duration::from_millis(interval_ms),
            source_root,
            output_root,
            project_root,
        }
    }

    /// Whether the watch loop tracks files with this path's extension
    pub fn is_tracked(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}
