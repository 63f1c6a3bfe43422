//! Spec Variant Derivation
//!
//! Reclassifies a documentation language as a `specs`-category variant with
//! stable, cached results. The cache is keyed by descriptor name (unique
//! across the registry), populated at most once per key, and never evicted —
//! the registry is fixed, so the key space cannot grow at runtime.

use crate::domain::language::{Category, Language, LanguageError};
use dashmap::DashMap;
use std::sync::LazyLock;

/// Memoized spec variants. Values are leaked once per docs language so every
/// caller sees the same `&'static Language` instance.
static SPEC_CACHE: LazyLock<DashMap<&'static str, &'static Language>> =
    LazyLock::new(DashMap::new);

/// Derive the `specs`-category twin of a docs-category language.
///
/// Repeated calls with the same input return the identical cached instance
/// (pointer-equal, not merely value-equal), so callers may use the result as
/// a cache or deduplication key. Any non-docs input is a usage error.
pub fn as_spec(language: &Language) -> Result<&'static Language, LanguageError> {
    if language.category() != Category::Docs {
        return Err(LanguageError::InvalidCategory {
            name: language.name(),
            category: language.category(),
        });
    }

    let variant = *SPEC_CACHE
        .entry(language.name())
        .or_insert_with(|| &*Box::leak(Box::new(language.to_spec_variant())));
    Ok(variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::language_named;

    #[test]
    fn test_derives_specs_category() {
        let md = language_named("Markdown").unwrap();
        let spec = as_spec(md).unwrap();
        assert_eq!(spec.category(), Category::Specs);
        assert_eq!(spec.name(), "Markdown");
        assert_eq!(spec.color(), md.color());
        assert_eq!(spec.extensions(), md.extensions());
    }

    #[test]
    fn test_repeated_calls_return_identical_instance() {
        let rst = language_named("reStructuredText").unwrap();
        let first = as_spec(rst).unwrap();
        let second = as_spec(rst).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_rejects_non_docs_language() {
        let py = language_named("Python").unwrap();
        let err = as_spec(py).unwrap_err();
        assert_eq!(
            err,
            LanguageError::InvalidCategory {
                name: "Python",
                category: Category::Code,
            }
        );
    }

    #[test]
    fn test_rejects_already_derived_variant() {
        let md = language_named("Markdown").unwrap();
        let spec = as_spec(md).unwrap();
        assert!(matches!(
            as_spec(spec),
            Err(LanguageError::InvalidCategory { .. })
        ));
    }
}
