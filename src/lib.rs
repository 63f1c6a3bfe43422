// Main library entry point for tallyman's language classification engine.

pub mod domain;

pub use domain::index::{EXTENSION_MAP, FILENAME_MAP};
pub use domain::language::{Category, Language, LanguageError};
pub use domain::registry::{language_named, validate_registry, RegistryError, LANGUAGES, MIN_LANGUAGES};
pub use domain::resolve::identify_language;
pub use domain::spec::as_spec;
