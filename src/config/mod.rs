//! Configuration module for Stitch
//!
//! Resolution order:
//! 1. Environment variables (STITCH_*)
//! 2. Project config (`stitch.toml` next to `src/`)
//! 3. Built-in defaults
//!
//! Paths are not configurable; only tunables such as the poll interval are.

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{
    BuildConfig, BuildSection, Config, WatchSection, CONFIG_FILE, DIST_DIR, ENTRY_FILE,
    MIN_POLL_INTERVAL_MS, OUTPUT_FILE, SOURCE_DIR,
};
