//! Parsed shape of komorebi's `applications.yaml` document.
//!
//! Deserialization is deliberately loose: only the keys this generator
//! reads are modeled, unknown keys are ignored, and `kind` stays a plain
//! string so an unrecognized kind surfaces as the renderer's
//! undefined-kind error rather than a YAML error.  A missing `name`,
//! `kind`, or `id` key is a fatal parse error.

use std::path::Path;

use serde::Deserialize;

use crate::error::ParseError;

/// One application record from the rules document.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationEntry {
    /// Display name of the application, emitted as a comment above its rules.
    pub name: String,

    /// Rules describing windows of this application that should be exempt
    /// from tiling.  Entries without this key produce no output at all.
    #[serde(default)]
    pub float_identifiers: Option<Vec<RawRule>>,
}

/// One window-matching rule, exactly as it appears in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    /// Window attribute to match on: `Class`, `Exe`, or `Title`.
    /// Validated by the renderer, not here.
    pub kind: String,

    /// Identifier value the attribute is compared against.
    pub id: String,

    /// Comparison method; only `Equals` (or absent) is supported.
    #[serde(default)]
    pub matching_strategy: Option<String>,

    /// Free-form annotation carried through to the generated line.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Read the cached rules document from `path` and deserialize it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid rules
/// document.
pub fn load_document(path: &Path) -> Result<Vec<ApplicationEntry>, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&content).map_err(|source| ParseError::InvalidYaml {
        file: path.display().to_string(),
        source,
    })
}

/// Deserialize a YAML string into the ordered sequence of application
/// entries.
///
/// # Errors
///
/// Returns an error on malformed YAML or a missing required key.
pub fn parse_document(yaml: &str) -> Result<Vec<ApplicationEntry>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
