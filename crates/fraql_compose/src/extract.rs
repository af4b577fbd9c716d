//! Name extraction over raw query text.
//!
//! This is deliberately not a GraphQL parser. The grammar recognized here is
//! the minimal one needed to address a document for transport:
//! `(query|mutation) <Name>`, `fragment <Name>`, and the spread marker
//! `...<Name>`. Everything else in the text is opaque.

use crate::error::{ComposeError, ComposeResult};
use indexmap::IndexSet;
use regex::Regex;
use std::sync::OnceLock;

fn operation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:query|mutation)\s+([_A-Za-z][_0-9A-Za-z]*)")
            .expect("operation pattern is valid")
    })
}

fn fragment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\bfragment\s+([_A-Za-z][_0-9A-Za-z]*)")
            .expect("fragment pattern is valid")
    })
}

fn spread_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\.\.\.([_A-Za-z][_0-9A-Za-z]*)")
            .expect("spread pattern is valid")
    })
}

/// Extracts the operation name from a query document.
///
/// Takes the first occurrence of the `query` or `mutation` keyword followed
/// by an identifier. First-match semantics: documents with multiple
/// operations yield the first name; anonymous operations fail with
/// [`ComposeError::InvalidQuery`].
pub fn operation_name(query: &str) -> ComposeResult<&str> {
    operation_re()
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ComposeError::InvalidQuery)
}

/// Extracts the fragment name from a fragment definition.
///
/// Takes the first occurrence of the `fragment` keyword followed by an
/// identifier; fails with [`ComposeError::InvalidFragment`] when none exists.
pub fn fragment_name(source: &str) -> ComposeResult<&str> {
    fragment_re()
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ComposeError::InvalidFragment)
}

/// Collects every identifier referenced via spread syntax (`...Name`).
///
/// Duplicates are removed; first-seen order is preserved so expansion output
/// is deterministic. An inline type condition written without a space
/// (`...on Type`) surfaces as the identifier `on`; callers filter against
/// their registry, so the stray name is inert.
pub fn spread_names(text: &str) -> Vec<&str> {
    let mut names: IndexSet<&str> = IndexSet::new();
    for caps in spread_re().captures_iter(text) {
        if let Some(m) = caps.get(1) {
            names.insert(m.as_str());
        }
    }
    names.into_iter().collect()
}
