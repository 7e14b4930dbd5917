//! Renderer: turn parsed application entries into the generated C# file.
//!
//! This is the whole value of the tool — formatting policy, kind-scoped
//! deduplication, and the fixed framing templates live here.  Everything
//! writes through a single [`std::io::Write`] sink so the command layer
//! can hold one scoped file handle for header, body, and footer.  On a
//! validation error the sink is left holding the header plus every entry
//! processed before the offending rule; the partial, uncompilable file is
//! intentional so a failed generation cannot go unnoticed.

use std::collections::{HashMap, HashSet};
use std::io::Write;

use crate::error::RenderError;
use crate::rules::{ApplicationEntry, RawRule};

/// Fixed header template: the license block and class declaration,
/// ending inside the body of `LoadWindowsIgnoredByWhim`.  Supplied by an
/// external collaborator; treated as opaque text.
pub const HEADER: &str = r#"/* This file was generated from data with the following license:
 *
 * MIT License
 *
 * Copyright (c) 2021 Jade Iqbal
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

namespace Whim;

/// <summary>
/// Defaults for various <see cref="IFilterManager"/>s.
/// </summary>
public static class DefaultFilteredWindows
{
	/// <summary>
	/// Load the windows which should be ignored by Whim by default.
	/// </summary>
	/// <param name="filterManager"></param>
	public static void LoadWindowsIgnoredByWhim(IFilterManager filterManager)
	{
		filterManager.AddProcessFileNameFilter("SearchUI.exe");

		/// Auto-generated rules
"#;

/// Fixed footer template: closes the generated method and class and adds
/// the location-restoring filter loader.
pub const FOOTER: &str = r#"	}

	/// <summary>
	/// Load the windows which try to set their own locations when the start up.
	/// See <see cref="IWindowManager.LocationRestoringFilterManager"/>
	/// </summary>
	/// <param name="filterManager"></param>
	public static void LoadLocationRestoringWindows(IFilterManager filterManager) =>
		filterManager.AddProcessFileNameFilter("firefox.exe").AddProcessFileNameFilter("gateway64.exe");
}
"#;

/// Indentation of generated rule lines (method bodies sit two tabs deep).
const INDENT: &str = "\t\t";

/// Comment marker used for application names and duplicate rules.
const COMMENT: &str = "// ";

/// Receiver the generated filter calls are chained on.
const RECEIVER: &str = "filterManager";

/// The only matching strategy the generated equality filters can express.
const SUPPORTED_STRATEGY: &str = "Equals";

/// Window attribute a rule matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Window class name.
    Class,
    /// Owning executable's file name.
    Exe,
    /// Window title text.
    Title,
}

impl RuleKind {
    /// Parse a document `kind` value; `None` for anything unrecognized.
    #[must_use]
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "Class" => Some(Self::Class),
            "Exe" => Some(Self::Exe),
            "Title" => Some(Self::Title),
            _ => None,
        }
    }

    /// The `IFilterManager` method that applies a filter of this kind.
    #[must_use]
    pub const fn filter_method(self) -> &'static str {
        match self {
            Self::Class => "AddWindowClassFilter",
            Self::Exe => "AddProcessFileNameFilter",
            Self::Title => "AddTitleFilter",
        }
    }
}

/// Identifiers already emitted during this run, scoped per rule kind.
///
/// Scoping matters: the same string can legitimately name both a window
/// class and an executable, and suppressing one because the other was seen
/// would drop a valid rule.  Owned by [`render_document`] for the lifetime
/// of a single run.
#[derive(Debug, Default)]
pub struct DedupIndex {
    seen: HashMap<RuleKind, HashSet<String>>,
}

impl DedupIndex {
    /// Record `(kind, id)` and report whether it was already present.
    ///
    /// The id is recorded regardless of duplicate status.
    pub fn record(&mut self, kind: RuleKind, id: &str) -> bool {
        !self.seen.entry(kind).or_default().insert(id.to_owned())
    }
}

/// Render the complete generated file: header, one block per application
/// entry (in document order), footer.
///
/// Entries without `float_identifiers` are skipped entirely — not even
/// their name appears.
///
/// # Errors
///
/// Returns an error on the first rule with an unsupported matching
/// strategy or an undefined kind, or if writing to `out` fails.  The
/// footer is not written on error.
pub fn render_document<W: Write>(
    doc: &[ApplicationEntry],
    out: &mut W,
) -> Result<(), RenderError> {
    out.write_all(HEADER.as_bytes())?;

    let mut seen = DedupIndex::default();
    for app in doc {
        let Some(rules) = &app.float_identifiers else {
            continue;
        };
        writeln!(out)?;
        writeln!(out, "{INDENT}{COMMENT}{}", app.name)?;
        for rule in rules {
            render_rule(rule, &mut seen, out)?;
        }
    }

    out.write_all(FOOTER.as_bytes())?;
    Ok(())
}

/// Validate one rule and emit its generated line.
fn render_rule<W: Write>(
    rule: &RawRule,
    seen: &mut DedupIndex,
    out: &mut W,
) -> Result<(), RenderError> {
    // If future rules use regex, they can be expressed via AddTitleMatchFilter.
    if let Some(strategy) = &rule.matching_strategy {
        if strategy != SUPPORTED_STRATEGY {
            return Err(RenderError::UnsupportedStrategy {
                strategy: strategy.clone(),
                id: rule.id.clone(),
            });
        }
    }

    let kind = RuleKind::parse(&rule.kind).ok_or_else(|| RenderError::UndefinedKind {
        kind: rule.kind.clone(),
        id: rule.id.clone(),
    })?;

    let call = format!("{RECEIVER}.{}(\"{}\");", kind.filter_method(), rule.id);
    if seen.record(kind, &rule.id) {
        // Duplicates stay visible as no-ops so a reviewer can see the rule
        // was encountered and deliberately not re-applied.
        writeln!(out, "{INDENT}{COMMENT}{call}  {COMMENT}duplicate rule")?;
    } else if let Some(comment) = &rule.comment {
        writeln!(out, "{INDENT}{call}  {COMMENT}{comment}")?;
    } else {
        writeln!(out, "{INDENT}{call}")?;
    }
    Ok(())
}
