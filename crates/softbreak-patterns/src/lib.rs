#![forbid(unsafe_code)]

//! Embedded hyphenation pattern resources.
//!
//! Each resource is a JSON document in the format the `softbreak` engine
//! loads: a mapping from boundary-wrapped pattern substrings to per-gap
//! weight vectors, plus a list of pre-hyphenated exception words using `-`
//! as the in-resource break marker.
//!
//! The pattern sets shipped here are compact, curated subsets of the full
//! TeX distributions, sufficient for common vocabulary. Applications with
//! heavier coverage needs can load a full resource at runtime through
//! `softbreak::LanguageResource` instead.

/// American English (`en-US`).
pub const EN_US: &str = include_str!("../data/en-us.json");

/// German (`de`). The German resource carries no exception words.
pub const DE: &str = include_str!("../data/de.json");

/// Norwegian Bokmål (`no`).
pub const NO: &str = include_str!("../data/no.json");

/// Embedded resources keyed by canonical (lowercase) language code.
const REGISTRY: &[(&str, &str)] = &[("de", DE), ("en-us", EN_US), ("no", NO)];

/// Look up the embedded JSON resource for a language code.
///
/// Codes are matched ASCII-case-insensitively, so `"en-US"` and `"en-us"`
/// resolve to the same resource. Returns `None` for unknown codes.
#[must_use]
pub fn resource(code: &str) -> Option<&'static str> {
    REGISTRY
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, json)| *json)
}

/// Canonical codes of every embedded language, in sorted order.
pub fn available() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(code, _)| *code)
}
