//! Language Descriptor Module
//!
//! Defines the immutable language descriptors used to classify source files.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Broad classification bucket a language belongs to.
///
/// The registry only ever contains the four base categories; `Specs` is a
/// derived category produced by [`as_spec`](crate::domain::spec::as_spec)
/// for documentation languages that hold specification documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Code,
    Design,
    Docs,
    Data,
    Specs,
}

impl Category {
    /// Lowercase label, as it appears in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Code => "code",
            Category::Design => "design",
            Category::Docs => "docs",
            Category::Data => "data",
            Category::Specs => "specs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recognized language: display name, category, display color, and the
/// file extensions it claims.
///
/// Descriptors are frozen at construction. Fields are private and there are
/// no setters, so a descriptor obtained from the registry (or from
/// `as_spec`) can never be altered:
///
/// ```compile_fail
/// let lang = tallyman::identify_language(std::path::Path::new("main.py")).unwrap();
/// lang.name = "Nope";
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    name: &'static str,
    category: Category,
    color: &'static str,
    extensions: &'static [&'static str],
}

impl Language {
    /// Construct a descriptor. Crate-private: all descriptors come from the
    /// builtin registry or from `as_spec`.
    pub(crate) const fn new(
        name: &'static str,
        category: Category,
        color: &'static str,
        extensions: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            category,
            color,
            extensions,
        }
    }

    /// Display name of the language (e.g., "Python", "C++").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Classification bucket this language falls into.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Hex display color, passed through unchanged by all derivations.
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Extensions this language claims, each lowercase with a leading dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// The `specs`-category twin of this descriptor. Callers go through
    /// [`as_spec`](crate::domain::spec::as_spec), which checks the category
    /// and memoizes the result.
    pub(crate) const fn to_spec_variant(&self) -> Language {
        Language {
            name: self.name,
            category: Category::Specs,
            color: self.color,
            extensions: self.extensions,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Usage errors raised when deriving descriptor variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// `as_spec` was handed a language outside the `docs` category.
    #[error("cannot derive a spec variant of `{name}`: category is `{category}`, expected `docs`")]
    InvalidCategory {
        name: &'static str,
        category: Category,
    },
}
