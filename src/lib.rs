//! Stitch - single-page HTML assembler
//!
//! Stitch flattens `src/index.html` and the partials it references through
//! `<!-- include:path -->` markers into `dist/index.html`, and can keep that
//! output current by polling the source tree for changes.

pub mod build;
pub mod config;
pub mod error;
pub mod fs;
pub mod resolver;
pub mod watcher;

// Re-exports for convenience
pub use build::{build, BuildReport};
pub use config::{BuildConfig, Config, ConfigWarning};
pub use error::{StitchError, StitchResult};
pub use resolver::{find_includes, resolve, resolve_text, IncludeDirective, ResolvedOutput};
pub use watcher::{watch, ChangeSet, Poller, Snapshot, WatchEvent};
