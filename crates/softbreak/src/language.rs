#![forbid(unsafe_code)]

//! Language resources and the immutable per-language snapshot.
//!
//! A resource is the external JSON document described in the crate docs:
//! pattern substrings mapped to weight vectors, plus marked exception
//! words. Building a [`LanguageSnapshot`] compiles the patterns into a
//! trie and parses the built-in exceptions; the snapshot is immutable and
//! cheap to share for the rest of its life.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HyphenationError, Result};
use crate::exception::{Exception, ExceptionMap};
use crate::pattern::PatternSet;
use crate::token::is_decodable;

/// Canonical form of a language code: trimmed, ASCII-lowercased.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// External per-language resource document.
///
/// `patterns` keys may include the `.` boundary marker; each weight vector
/// must carry exactly `key chars + 1` entries. `exceptions` entries use
/// `-` as break marker.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageResource {
    pub language: String,
    pub patterns: BTreeMap<String, Vec<u8>>,
    #[serde(default)]
    pub exceptions: Vec<String>,
}

impl LanguageResource {
    /// Parse a resource from its JSON text. `code` only labels errors.
    pub fn from_json(code: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| HyphenationError::malformed(code, e.to_string()))
    }

    /// Read and parse a resource file. The slow path of language
    /// selection; never called during `hyphenate`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&path.display().to_string(), &json)
    }
}

/// Immutable dictionary + built-in exception bundle for one language.
///
/// Replaced wholesale on language change; `hyphenate` holds one handle per
/// call and therefore always sees a consistent pairing of patterns and
/// exceptions.
#[derive(Debug)]
pub struct LanguageSnapshot {
    code: String,
    patterns: PatternSet,
    built_in: ExceptionMap,
}

impl LanguageSnapshot {
    /// Compile a resource. Pattern entries with a bad arity make the whole
    /// resource malformed; built-in exception entries are dropped
    /// individually, like custom ones.
    pub fn build(resource: &LanguageResource) -> Result<Self> {
        let code = normalize_code(&resource.language);

        let mut patterns = PatternSet::new();
        for (key, weights) in &resource.patterns {
            if !patterns.insert(key, weights) {
                return Err(HyphenationError::malformed(
                    &code,
                    format!(
                        "pattern {key:?} carries {} weights for {} chars",
                        weights.len(),
                        key.chars().count()
                    ),
                ));
            }
        }

        let mut built_in = ExceptionMap::default();
        for entry in &resource.exceptions {
            if !is_decodable(entry) {
                tracing::warn!(
                    message = "hyphenator.exception_dropped",
                    layer = "built_in",
                    reason = "undecodable"
                );
                continue;
            }
            match Exception::parse(entry) {
                Some((key, exc)) => {
                    built_in.insert(key, exc);
                }
                None => {
                    tracing::warn!(
                        message = "hyphenator.exception_dropped",
                        layer = "built_in",
                        reason = "empty"
                    );
                }
            }
        }

        Ok(Self {
            code,
            patterns,
            built_in,
        })
    }

    /// Canonical language code of this snapshot.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Look up a built-in exception by canonical lowercase key.
    #[must_use]
    pub fn exception(&self, key: &str) -> Option<&Exception> {
        self.built_in.get(key)
    }

    /// Number of built-in exception words.
    #[must_use]
    pub fn exception_count(&self) -> usize {
        self.built_in.len()
    }
}
