//! Domain-specific error types for the rules generator.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors (e.g., [`FetchError`],
//! [`RenderError`]) while the command layer at the CLI boundary converts
//! them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! GeneratorError
//! ├── Fetch(FetchError)   — HTTP transport, cache file write
//! ├── Parse(ParseError)   — YAML deserialization, cache file read
//! └── Render(RenderError) — unsupported strategy, undefined kind, output I/O
//! ```
//!
//! Every failure is fatal: nothing is retried or downgraded to a warning,
//! and the first error aborts the remainder of the run.

use thiserror::Error;

/// Top-level error type for the rules generator.
///
/// Aggregates per-stage sub-errors and is convertible to
/// [`anyhow::Error`] for use at the CLI command boundary.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Fetch stage error (HTTP transport failure, cache write failure).
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Parse stage error (cache read failure, invalid YAML).
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Render stage error (bad rule data, output write failure).
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Errors that arise while downloading the rules document.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request failed (connection error or non-success status).
    #[error("HTTP request for {url} failed: {source}")]
    Request {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        source: ureq::Error,
    },

    /// The response body could not be written to the local cache file.
    #[error("IO error writing rules cache {path}: {source}")]
    Io {
        /// Path to the cache file that could not be written.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while deserializing the cached rules document.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The cache file could not be read.
    #[error("IO error reading rules cache {path}: {source}")]
    Io {
        /// Path to the cache file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The cache file is not valid YAML or is missing a required key.
    #[error("Invalid YAML in {file}: {source}")]
    InvalidYaml {
        /// File that failed to deserialize.
        file: String,
        /// Underlying deserialization error.
        source: serde_yaml::Error,
    },
}

/// Errors that arise while rendering the generated source file.
///
/// The data errors abort the entire remaining document, not just the
/// offending rule — a partially-correct generated file is worse than no
/// generated file.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A rule carries a matching strategy other than `Equals`.
    #[error("Matching strategy \"{strategy}\" unsupported (rule \"{id}\")")]
    UnsupportedStrategy {
        /// The unsupported strategy value.
        strategy: String,
        /// Identifier of the offending rule.
        id: String,
    },

    /// A rule carries a kind outside `Class`, `Exe`, `Title`.
    #[error("Undefined kind: {kind} (rule \"{id}\")")]
    UndefinedKind {
        /// The unrecognized kind value.
        kind: String,
        /// Identifier of the offending rule.
        id: String,
    },

    /// Writing the generated file failed.
    #[error("IO error writing generated file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    // -----------------------------------------------------------------------
    // FetchError
    // -----------------------------------------------------------------------

    #[test]
    fn fetch_error_io_display() {
        let e = FetchError::Io {
            path: "komorebi_rules.yaml".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("komorebi_rules.yaml"));
        assert!(e.to_string().contains("IO error writing rules cache"));
    }

    #[test]
    fn fetch_error_io_has_source() {
        use std::error::Error as StdError;
        let e = FetchError::Io {
            path: "komorebi_rules.yaml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.source().is_some());
    }

    // -----------------------------------------------------------------------
    // ParseError
    // -----------------------------------------------------------------------

    #[test]
    fn parse_error_io_display() {
        let e = ParseError::Io {
            path: "komorebi_rules.yaml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("IO error reading rules cache"));
        assert!(e.to_string().contains("komorebi_rules.yaml"));
    }

    #[test]
    fn parse_error_invalid_yaml_display() {
        let source = serde_yaml::from_str::<Vec<String>>("{ not: [valid")
            .expect_err("unterminated YAML must fail");
        let e = ParseError::InvalidYaml {
            file: "komorebi_rules.yaml".to_string(),
            source,
        };
        assert!(e.to_string().starts_with("Invalid YAML in komorebi_rules.yaml"));
    }

    // -----------------------------------------------------------------------
    // RenderError
    // -----------------------------------------------------------------------

    #[test]
    fn render_error_unsupported_strategy_display() {
        let e = RenderError::UnsupportedStrategy {
            strategy: "Regex".to_string(),
            id: "foo.exe".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Matching strategy \"Regex\" unsupported (rule \"foo.exe\")"
        );
    }

    #[test]
    fn render_error_undefined_kind_display() {
        let e = RenderError::UndefinedKind {
            kind: "Path".to_string(),
            id: "foo.exe".to_string(),
        };
        assert_eq!(e.to_string(), "Undefined kind: Path (rule \"foo.exe\")");
    }

    #[test]
    fn render_error_from_io() {
        let e: RenderError = io::Error::other("disk full").into();
        assert!(e.to_string().contains("IO error writing generated file"));
    }

    // -----------------------------------------------------------------------
    // GeneratorError conversions
    // -----------------------------------------------------------------------

    #[test]
    fn generator_error_from_fetch_error() {
        let fetch_err = FetchError::Io {
            path: "cache".to_string(),
            source: io::Error::other("boom"),
        };
        let e: GeneratorError = fetch_err.into();
        assert!(e.to_string().contains("Fetch error"));
    }

    #[test]
    fn generator_error_from_parse_error() {
        let parse_err = ParseError::Io {
            path: "cache".to_string(),
            source: io::Error::other("boom"),
        };
        let e: GeneratorError = parse_err.into();
        assert!(e.to_string().contains("Parse error"));
    }

    #[test]
    fn generator_error_from_render_error() {
        let render_err = RenderError::UndefinedKind {
            kind: "Path".to_string(),
            id: "x".to_string(),
        };
        let e: GeneratorError = render_err.into();
        assert!(e.to_string().contains("Render error"));
        assert!(e.to_string().contains("Path"));
    }

    // -----------------------------------------------------------------------
    // Send + Sync bounds
    // -----------------------------------------------------------------------

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<GeneratorError>();
        assert_send_sync::<FetchError>();
        assert_send_sync::<ParseError>();
        assert_send_sync::<RenderError>();
    }

    // -----------------------------------------------------------------------
    // anyhow conversion
    // -----------------------------------------------------------------------

    #[test]
    fn render_error_converts_to_anyhow() {
        let e = RenderError::UnsupportedStrategy {
            strategy: "Regex".to_string(),
            id: "x".to_string(),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }

    #[test]
    fn generator_error_converts_to_anyhow() {
        let e: GeneratorError = RenderError::Io(io::Error::other("x")).into();
        let _anyhow_err: anyhow::Error = e.into();
    }
}
