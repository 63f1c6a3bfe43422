//! Lookup Indices
//!
//! Derived lookup structures built once from the registry: an extension map
//! for the common case and a filename map (plus a short ordered list of
//! filename patterns) for files whose identity is carried by their name.
//! Both are read-only after construction; a build-time inconsistency aborts
//! initialization instead of silently overwriting an entry.

use crate::domain::language::Language;
use crate::domain::registry::{language_named, RegistryError, LANGUAGES};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Exact filenames (compared case-insensitively, keyed lowercase) that
/// resolve ahead of any extension rule. Targets are registry display names.
const FILENAME_RULES: &[(&str, &str)] = &[
    ("makefile", "Makefile"),
    ("gnumakefile", "Makefile"),
    ("dockerfile", "Docker"),
    ("docker-compose.yml", "Docker"),
    ("docker-compose.yaml", "Docker"),
    ("compose.yml", "Docker"),
    ("compose.yaml", "Docker"),
];

/// A filename shape matched against the lowercased final path component.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FilenamePattern {
    /// Filename starts with the given text (e.g. `dockerfile.` for `Dockerfile.dev`).
    Prefix(&'static str),
    /// Filename ends with the given text (e.g. `.mk` for `rules.mk`).
    Suffix(&'static str),
}

impl FilenamePattern {
    pub(crate) fn matches(&self, filename: &str) -> bool {
        match self {
            FilenamePattern::Prefix(text) => filename.starts_with(text),
            FilenamePattern::Suffix(text) => filename.ends_with(text),
        }
    }

    fn text(&self) -> &'static str {
        match self {
            FilenamePattern::Prefix(text) | FilenamePattern::Suffix(text) => text,
        }
    }
}

/// Filename-pattern families, tried in this exact order after the exact
/// names and before extension lookup.
const PATTERN_RULES: &[(FilenamePattern, &str)] = &[
    (FilenamePattern::Prefix("dockerfile."), "Docker"),
    (FilenamePattern::Suffix(".dockerfile"), "Docker"),
    (FilenamePattern::Suffix(".mk"), "Makefile"),
];

/// Extension → descriptor, one entry per extension declared in the registry.
pub static EXTENSION_MAP: LazyLock<HashMap<&'static str, &'static Language>> =
    LazyLock::new(|| {
        let mut map: HashMap<&'static str, &'static Language> = HashMap::new();
        for lang in LANGUAGES.iter() {
            for &ext in lang.extensions() {
                if let Some(first) = map.insert(ext, lang) {
                    // Registry validation already guarantees uniqueness.
                    panic!(
                        "invalid language registry: {}",
                        RegistryError::DuplicateExtension {
                            extension: ext,
                            first: first.name(),
                            second: lang.name(),
                        }
                    );
                }
            }
        }
        debug!(extensions = map.len(), "extension index built");
        map
    });

/// Lowercased exact filename → descriptor. Every target is checked against
/// the registry when the map is built.
pub static FILENAME_MAP: LazyLock<HashMap<&'static str, &'static Language>> =
    LazyLock::new(|| {
        let mut map: HashMap<&'static str, &'static Language> = HashMap::new();
        for &(filename, target) in FILENAME_RULES {
            let lang = language_named(target).unwrap_or_else(|| {
                panic!(
                    "invalid language registry: {}",
                    RegistryError::UnknownFilenameTarget { filename, target }
                )
            });
            map.insert(filename, lang);
        }
        debug!(filenames = map.len(), "filename index built");
        map
    });

/// Ordered pattern rules with their targets resolved against the registry.
pub(crate) static FILENAME_PATTERNS: LazyLock<Vec<(FilenamePattern, &'static Language)>> =
    LazyLock::new(|| {
        PATTERN_RULES
            .iter()
            .map(|&(pattern, target)| {
                let lang = language_named(target).unwrap_or_else(|| {
                    panic!(
                        "invalid language registry: {}",
                        RegistryError::UnknownFilenameTarget {
                            filename: pattern.text(),
                            target,
                        }
                    )
                });
                (pattern, lang)
            })
            .collect()
    });
