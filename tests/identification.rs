/// End-to-end resolver behavior: extension lookup, filename rules, and the
/// precedence between them.
use std::fs;
use std::path::Path;
use tallyman::{identify_language, Category};

fn name_of(path: &str) -> Option<&'static str> {
    identify_language(Path::new(path)).map(|lang| lang.name())
}

#[test]
fn common_source_files_resolve() {
    assert_eq!(name_of("main.py"), Some("Python"));
    assert_eq!(name_of("lib.rs"), Some("Rust"));
    assert_eq!(name_of("App.jsx"), Some("JavaScript"));
    assert_eq!(name_of("component.tsx"), Some("TypeScript"));
    assert_eq!(name_of("styles.css"), Some("CSS"));
    assert_eq!(name_of("query.sql"), Some("SQL"));
}

#[test]
fn unknown_files_resolve_to_none() {
    assert_eq!(name_of("photo.png"), None);
    assert_eq!(name_of("binary.exe"), None);
    // A bare README has no extension and no filename rule.
    assert_eq!(name_of("README"), None);
}

#[test]
fn resolution_is_case_insensitive() {
    assert_eq!(name_of("README.MD"), name_of("readme.md"));
    assert_eq!(name_of("Readme.Md"), Some("Markdown"));
    assert_eq!(name_of("SETUP.PY"), Some("Python"));
}

#[test]
fn makefile_family_resolves_by_name_and_pattern() {
    for path in ["Makefile", "makefile", "GNUmakefile", "rules.mk"] {
        assert_eq!(name_of(path), Some("Makefile"), "failed for {path}");
    }
}

#[test]
fn docker_family_resolves_by_name_and_pattern() {
    for path in [
        "Dockerfile",
        "Dockerfile.dev",
        "app.dockerfile",
        "docker-compose.yml",
        "docker-compose.yaml",
        "compose.yml",
        "compose.yaml",
    ] {
        assert_eq!(name_of(path), Some("Docker"), "failed for {path}");
    }
}

#[test]
fn filename_rules_dominate_extension_rules() {
    // .yml on its own belongs to YAML; the compose filename must win.
    assert_eq!(name_of("config.yml"), Some("YAML"));
    assert_eq!(name_of("docker-compose.yml"), Some("Docker"));
}

#[test]
fn directories_in_the_path_are_ignored() {
    assert_eq!(name_of("deeply/nested/dir/main.py"), Some("Python"));
    // A recognized name as a directory component must not leak through.
    assert_eq!(name_of("makefile.d/notes"), None);
}

#[test]
fn classifies_a_scratch_tree_like_a_counter_would() {
    // Drive the resolver the way the counting pipeline does: walk a real
    // directory and classify each entry by name.
    let dir = tempfile::tempdir().unwrap();
    for name in ["main.py", "lib.rs", "README.md", "Makefile", "photo.png"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    let mut code = 0;
    let mut docs = 0;
    let mut unknown = 0;
    for entry in fs::read_dir(dir.path()).unwrap() {
        match identify_language(&entry.unwrap().path()) {
            Some(lang) if lang.category() == Category::Code => code += 1,
            Some(lang) if lang.category() == Category::Docs => docs += 1,
            Some(_) => {}
            None => unknown += 1,
        }
    }

    assert_eq!(code, 3, "main.py, lib.rs, Makefile");
    assert_eq!(docs, 1, "README.md");
    assert_eq!(unknown, 1, "photo.png");
}
