//! komorebi → Whim default filter rules generator.
//!
//! Build-time code generator that downloads komorebi's
//! application-specific-configuration document (`applications.yaml`),
//! caches it next to the tool, and regenerates
//! `DefaultFilteredWindows.cs` — the checked-in C# source file that tells
//! Whim which windows to exempt from tiling by default.
//!
//! The pipeline is a single forward pass with no retries or backtracking:
//!
//! - **[`fetch`]** — one blocking GET, response body persisted verbatim
//! - **[`rules`]** — deserialize the cached YAML into application records
//! - **[`render`]** — walk the records in document order, deduplicate per
//!   rule kind, and emit the generated file between a fixed header and
//!   footer
//! - **[`commands`]** — top-level subcommand orchestration (`generate`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod render;
pub mod rules;
