//! Path Resolution
//!
//! Classifies a path into a language descriptor. Resolution is a fixed
//! chain: exact filename, then filename patterns, then extension — the
//! first hit wins, so filename identity always dominates extension rules
//! (`docker-compose.yml` is Docker, never YAML).
//!
//! An unrecognized path is a normal outcome, not an error. No filesystem
//! access happens here; the path is treated purely as a string.

use crate::domain::index::{EXTENSION_MAP, FILENAME_MAP, FILENAME_PATTERNS};
use crate::domain::language::Language;
use std::path::Path;

/// Identify the language of `path`, or `None` if nothing claims it.
///
/// All comparisons are case-insensitive: `README.MD`, `readme.md`, and
/// `Readme.Md` resolve identically.
pub fn identify_language(path: &Path) -> Option<&'static Language> {
    let filename = path.file_name()?.to_str()?.to_lowercase();

    by_exact_filename(&filename)
        .or_else(|| by_filename_pattern(&filename))
        .or_else(|| by_extension(&filename))
}

/// Step 1: exact filename entries (Makefile, Dockerfile, compose files).
fn by_exact_filename(filename: &str) -> Option<&'static Language> {
    FILENAME_MAP.get(filename).copied()
}

/// Step 2: filename-pattern families, in their declared order.
fn by_filename_pattern(filename: &str) -> Option<&'static Language> {
    FILENAME_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.matches(filename))
        .map(|&(_, lang)| lang)
}

/// Step 3: the text after the last `.`, dot included. A filename without a
/// dot has no extension and falls through to `None`.
fn by_extension(filename: &str) -> Option<&'static Language> {
    let idx = filename.rfind('.')?;
    EXTENSION_MAP.get(&filename[idx..]).copied()
}
