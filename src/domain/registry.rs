//! Builtin Language Registry
//!
//! The authoritative, ordered table of language descriptors shipped with the
//! engine, plus the startup-time integrity validation that gates every query
//! surface. The table is compiled in and read-only; nothing mutates it at
//! runtime.

use crate::domain::language::{Category, Language};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Operational floor for the registry size. Dropping below this is a sign
/// the table was truncated by accident.
pub const MIN_LANGUAGES: usize = 30;

/// Startup-time registry integrity violations. Any of these aborts
/// initialization; none of them can occur once `LANGUAGES` has resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("language `{0}` declares no extensions")]
    NoExtensions(&'static str),

    #[error("language `{name}` declares malformed extension `{extension}` (expected lowercase with a leading dot)")]
    MalformedExtension {
        name: &'static str,
        extension: &'static str,
    },

    #[error("extension `{extension}` is claimed by both `{first}` and `{second}`")]
    DuplicateExtension {
        extension: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("language `{0}` is registered with derived category `specs`")]
    DerivedCategoryInRegistry(&'static str),

    #[error("filename rule `{filename}` targets unregistered language `{target}`")]
    UnknownFilenameTarget {
        filename: &'static str,
        target: &'static str,
    },

    #[error("registry holds {count} languages, expected at least {minimum}")]
    TooFewLanguages { count: usize, minimum: usize },
}

/// The builtin descriptor table, ordered by category. Every entry must pass
/// [`validate_registry`]; extensions are lowercase, dotted, and globally
/// unique across the whole table.
const BUILTIN: &[Language] = &[
    // code
    Language::new("Python", Category::Code, "#3572a5", &[".py", ".pyw", ".pyi"]),
    Language::new("Rust", Category::Code, "#dea584", &[".rs"]),
    Language::new("JavaScript", Category::Code, "#f1e05a", &[".js", ".mjs", ".cjs", ".jsx"]),
    Language::new("TypeScript", Category::Code, "#3178c6", &[".ts", ".tsx", ".mts", ".cts"]),
    Language::new("Go", Category::Code, "#00add8", &[".go"]),
    Language::new("Java", Category::Code, "#b07219", &[".java"]),
    Language::new("Kotlin", Category::Code, "#a97bff", &[".kt", ".kts"]),
    Language::new("Swift", Category::Code, "#f05138", &[".swift"]),
    Language::new("C", Category::Code, "#555555", &[".c", ".h"]),
    Language::new("C++", Category::Code, "#f34b7d", &[".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx"]),
    Language::new("C#", Category::Code, "#178600", &[".cs", ".csx"]),
    Language::new("Ruby", Category::Code, "#701516", &[".rb", ".rake", ".gemspec"]),
    Language::new("PHP", Category::Code, "#4f5d95", &[".php", ".phtml"]),
    Language::new("Shell", Category::Code, "#89e051", &[".sh", ".bash", ".zsh"]),
    Language::new("PowerShell", Category::Code, "#012456", &[".ps1", ".psm1"]),
    Language::new("Perl", Category::Code, "#0298c3", &[".pl", ".pm"]),
    Language::new("Lua", Category::Code, "#000080", &[".lua"]),
    Language::new("R", Category::Code, "#198ce7", &[".r"]),
    Language::new("Scala", Category::Code, "#c22d40", &[".scala", ".sc"]),
    Language::new("Haskell", Category::Code, "#5e5086", &[".hs", ".lhs"]),
    Language::new("Elixir", Category::Code, "#6e4a7e", &[".ex", ".exs"]),
    Language::new("Erlang", Category::Code, "#b83998", &[".erl", ".hrl"]),
    Language::new("Clojure", Category::Code, "#db5855", &[".clj", ".cljs", ".cljc"]),
    Language::new("Dart", Category::Code, "#00b4ab", &[".dart"]),
    Language::new("Zig", Category::Code, "#ec915c", &[".zig"]),
    Language::new("Julia", Category::Code, "#a270ba", &[".jl"]),
    Language::new("Groovy", Category::Code, "#4298b8", &[".groovy", ".gradle"]),
    Language::new("Objective-C", Category::Code, "#438eff", &[".m", ".mm"]),
    Language::new("SQL", Category::Code, "#e38c00", &[".sql"]),
    Language::new("Makefile", Category::Code, "#427819", &[".mk"]),
    Language::new("Docker", Category::Code, "#384d54", &[".dockerfile"]),
    Language::new("Vue", Category::Code, "#41b883", &[".vue"]),
    Language::new("Svelte", Category::Code, "#ff3e00", &[".svelte"]),
    // design
    Language::new("HTML", Category::Design, "#e34c26", &[".html", ".htm"]),
    Language::new("CSS", Category::Design, "#563d7c", &[".css"]),
    Language::new("Sass", Category::Design, "#c6538c", &[".scss", ".sass"]),
    Language::new("Less", Category::Design, "#1d365d", &[".less"]),
    // docs
    Language::new("Markdown", Category::Docs, "#083fa1", &[".md", ".markdown"]),
    Language::new("reStructuredText", Category::Docs, "#141414", &[".rst"]),
    Language::new("AsciiDoc", Category::Docs, "#73a0c5", &[".adoc", ".asciidoc"]),
    Language::new("LaTeX", Category::Docs, "#3d6117", &[".tex", ".bib"]),
    Language::new("Plain Text", Category::Docs, "#888888", &[".txt", ".text"]),
    Language::new("Org", Category::Docs, "#77aa99", &[".org"]),
    // data
    Language::new("JSON", Category::Data, "#292929", &[".json", ".jsonc"]),
    Language::new("YAML", Category::Data, "#cb171e", &[".yml", ".yaml"]),
    Language::new("TOML", Category::Data, "#9c4221", &[".toml"]),
    Language::new("XML", Category::Data, "#0060ac", &[".xml", ".xsd"]),
    Language::new("INI", Category::Data, "#d1dbe0", &[".ini", ".cfg", ".conf"]),
    Language::new("CSV", Category::Data, "#237346", &[".csv", ".tsv"]),
    Language::new("GraphQL", Category::Data, "#e10098", &[".graphql", ".gql"]),
    Language::new("Protocol Buffers", Category::Data, "#4a76c6", &[".proto"]),
];

/// The validated registry. Forcing this static runs [`validate_registry`]
/// exactly once; an integrity violation aborts initialization before any
/// query can be served.
pub static LANGUAGES: LazyLock<&'static [Language]> = LazyLock::new(|| {
    validate_registry(BUILTIN).unwrap_or_else(|err| panic!("invalid language registry: {err}"));
    debug!(languages = BUILTIN.len(), "language registry validated");
    BUILTIN
});

/// Check the registry invariants: non-empty lowercase dotted extensions,
/// global extension uniqueness, base categories only, minimum cardinality.
///
/// Exposed so validation tooling and tests can run the same checks the
/// `LANGUAGES` initializer runs.
pub fn validate_registry(languages: &[Language]) -> Result<(), RegistryError> {
    let mut claimed: HashMap<&'static str, &'static str> = HashMap::new();

    for lang in languages {
        if lang.category() == Category::Specs {
            return Err(RegistryError::DerivedCategoryInRegistry(lang.name()));
        }
        if lang.extensions().is_empty() {
            return Err(RegistryError::NoExtensions(lang.name()));
        }
        for &ext in lang.extensions() {
            if !ext.starts_with('.') || ext.len() < 2 || ext.chars().any(|c| c.is_uppercase()) {
                return Err(RegistryError::MalformedExtension {
                    name: lang.name(),
                    extension: ext,
                });
            }
            if let Some(first) = claimed.insert(ext, lang.name()) {
                return Err(RegistryError::DuplicateExtension {
                    extension: ext,
                    first,
                    second: lang.name(),
                });
            }
        }
    }

    if languages.len() < MIN_LANGUAGES {
        return Err(RegistryError::TooFewLanguages {
            count: languages.len(),
            minimum: MIN_LANGUAGES,
        });
    }

    Ok(())
}

/// Look up a registered language by its exact display name.
pub fn language_named(name: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.name() == name)
}
