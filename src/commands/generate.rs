//! The generate command: fetch, parse, and render the filter rules file.

use std::fs::File;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::error::GeneratorError;
use crate::fetch::{self, HttpTransport};
use crate::logging::Logger;
use crate::render;
use crate::rules;

/// URL of komorebi's application-specific-configuration document.
pub const RULES_URL: &str = "https://raw.githubusercontent.com/LGUG2Z/komorebi-application-specific-configuration/master/applications.yaml";

/// Local cache of the downloaded document, overwritten on every run.
pub const CACHE_FILE: &str = "komorebi_rules.yaml";

/// The generated C# source file.
pub const OUT_FILE: &str = "DefaultFilteredWindows.cs";

/// Run the generate command.
///
/// Downloads the rules document into the cache file, then regenerates the
/// output file from it.  Both files live in the current working
/// directory, colocated with the tool.
///
/// # Errors
///
/// Returns an error on any fetch, parse, or render failure.  Nothing is
/// retried; a failure mid-render leaves the partial output file in place.
pub fn run(log: &Logger) -> Result<()> {
    let version = option_env!("WHIM_RULES_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("whim-rules {version}"));

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let cache = cwd.join(CACHE_FILE);
    let out = cwd.join(OUT_FILE);

    log.stage("Fetching komorebi application rules");
    log.debug(&format!("GET {RULES_URL}"));
    fetch::download(&HttpTransport, RULES_URL, &cache).map_err(GeneratorError::Fetch)?;
    log.info(&format!("cached rules at {}", cache.display()));

    generate_from_cache(&cache, &out, log)
}

/// Parse the cached rules document and write the generated file.
///
/// Split out from [`run`] so the parse and render stages can be exercised
/// against a seeded cache file without network access.
///
/// The output file is created (truncating any previous artifact) before
/// the body is rendered, and every line is written through that one
/// handle.  A validation error therefore leaves a truncated file — header
/// plus the entries processed before the failure, no footer — which is
/// intentional: an uncompilable artifact forces the operator to notice a
/// failed generation.
///
/// # Errors
///
/// Returns an error if the cache cannot be parsed, the output file cannot
/// be created, or rendering fails.
pub fn generate_from_cache(cache: &Path, out: &Path, log: &Logger) -> Result<()> {
    log.stage("Parsing rules document");
    let doc = rules::load_document(cache).map_err(GeneratorError::Parse)?;
    log.info(&format!("loaded {} application entries", doc.len()));

    log.stage("Generating filter rules");
    let mut file =
        File::create(out).with_context(|| format!("creating output file {}", out.display()))?;
    render::render_document(&doc, &mut file).map_err(GeneratorError::Render)?;
    log.info(&format!("wrote {}", out.display()));
    Ok(())
}
