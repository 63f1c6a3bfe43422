// Command-line entry point for tallyman registry introspection.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tallyman::{identify_language, validate_registry, EXTENSION_MAP, FILENAME_MAP, LANGUAGES};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered language
    Languages {
        /// Dump the registry as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate registry invariants and index construction
    Check,

    /// Classify the given paths (no filesystem access, paths need not exist)
    Identify {
        /// Paths to classify
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tallyman=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Languages { json } => list_languages(json)?,
        Command::Check => check()?,
        Command::Identify { paths } => identify(&paths),
    }

    Ok(())
}

fn list_languages(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&*LANGUAGES)?);
        return Ok(());
    }

    for lang in LANGUAGES.iter() {
        println!(
            "{:<18} {:<8} {:<9} {}",
            lang.name(),
            lang.category(),
            lang.color(),
            lang.extensions().join(" ")
        );
    }
    Ok(())
}

fn check() -> Result<()> {
    validate_registry(*LANGUAGES)?;

    println!(
        "registry ok: {} languages, {} extensions, {} filenames",
        LANGUAGES.len(),
        EXTENSION_MAP.len(),
        FILENAME_MAP.len()
    );
    Ok(())
}

fn identify(paths: &[PathBuf]) {
    for path in paths {
        match identify_language(path) {
            Some(lang) => println!("{}: {} ({})", path.display(), lang.name(), lang.category()),
            None => println!("{}: unknown", path.display()),
        }
    }
}
