//! Include resolution
//!
//! Replaces `<!-- include:path -->` markers in the entry document with the
//! raw contents of the referenced partials. Paths are relative to the source
//! root, not to the including document.
//!
//! Expansion is a single pass over the entry document: partial contents are
//! never rescanned, so a marker inside a partial is emitted literally.

use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::BuildConfig;
use crate::error::{StitchError, StitchResult};

static INCLUDE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!-- include:(.+?) -->").expect("include marker pattern is valid")
});

/// An include marker found in a scanned buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// Byte range of the whole marker
    pub span: Range<usize>,
    /// Trimmed path, relative to the source root
    pub path: String,
}

/// Flattened text produced by one resolution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutput {
    pub content: String,
    /// Partials substituted, in marker order (repeats included)
    pub includes: Vec<PathBuf>,
}

/// Locate every include marker in `text`, in order of appearance.
pub fn find_includes(text: &str) -> Vec<IncludeDirective> {
    INCLUDE_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let path = caps.get(1)?.as_str().trim().to_string();
            Some(IncludeDirective {
                span: whole.range(),
                path,
            })
        })
        .collect()
}

/// Splice `replacements[i]` over `directives[i].span`.
///
/// Replacement text is copied verbatim.
pub fn substitute<S: AsRef<str>>(
    text: &str,
    directives: &[IncludeDirective],
    replacements: &[S],
) -> String {
    debug_assert_eq!(directives.len(), replacements.len());

    let extra: usize = replacements.iter().map(|r| r.as_ref().len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;

    for (directive, replacement) in directives.iter().zip(replacements) {
        out.push_str(&text[cursor..directive.span.start]);
        out.push_str(replacement.as_ref());
        cursor = directive.span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Resolve a document's text against `source_root`.
///
/// Every partial is read before anything is returned, so a missing one
/// fails the whole pass.
pub fn resolve_text(text: &str, source_root: &Path) -> StitchResult<ResolvedOutput> {
    let directives = find_includes(text);

    let mut includes = Vec::with_capacity(directives.len());
    let mut contents = Vec::with_capacity(directives.len());
    for directive in &directives {
        let path = partial_path(source_root, &directive.path)?;
        let partial = read_source(&path)?;
        contents.push(partial);
        includes.push(path);
    }

    Ok(ResolvedOutput {
        content: substitute(text, &directives, &contents),
        includes,
    })
}

/// Resolve the configured entry document.
pub fn resolve(config: &BuildConfig) -> StitchResult<ResolvedOutput> {
    let root = read_source(&config.entry)?;
    resolve_text(&root, &config.source_root)
}

/// Include paths are always relative to the source root.
fn partial_path(source_root: &Path, include: &str) -> StitchResult<PathBuf> {
    let relative = Path::new(include);
    if relative.is_absolute() {
        return Err(StitchError::missing_source(
            relative,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "include paths must be relative to the source root",
            ),
        ));
    }
    Ok(source_root.join(relative))
}

fn read_source(path: &Path) -> StitchResult<String> {
    fs::read_to_string(path).map_err(|e| StitchError::missing_source(path, e))
}
