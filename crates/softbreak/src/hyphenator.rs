#![forbid(unsafe_code)]

//! The hyphenator: language selection, limits, custom exceptions, and the
//! token processing loop.
//!
//! All state lives in atomically swapped immutable values, so every method
//! takes `&self` and `hyphenate` always reads a consistent snapshot while
//! a language change or exception edit is in flight. There is no locking
//! and no I/O on the `hyphenate` path.

use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};

use crate::error::{HyphenationError, Result};
use crate::exception::{Exception, ExceptionMap};
use crate::language::{LanguageResource, LanguageSnapshot, normalize_code};
use crate::segment::{Limits, insert_delimiter, segment, within_limits};
use crate::token::{Token, TokenKind, is_decodable};

/// Liang-style hyphenation engine for token sequences.
///
/// ```
/// use softbreak::{Hyphenator, Token};
///
/// let h = Hyphenator::new();
/// h.select_language("en-US")?;
/// h.set_min_length(2)?;
/// let out = h.hyphenate(&[Token::word("hyphenate")], "\u{00AD}", true);
/// assert_eq!(out[0].value(), "hy\u{00AD}phen\u{00AD}ate");
/// # Ok::<(), softbreak::HyphenationError>(())
/// ```
#[derive(Debug, Default)]
pub struct Hyphenator {
    language: ArcSwapOption<LanguageSnapshot>,
    custom: ArcSwap<ExceptionMap>,
    limits: ArcSwap<Limits>,
}

impl Hyphenator {
    /// Engine with no language selected and default limits. Until a
    /// language is selected, every token passes through unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Language selection ──────────────────────────────────────────────

    /// Activate the built-in resource registered for `code`.
    ///
    /// Codes are matched case-insensitively; re-selecting the active
    /// language is a no-op. On any failure the active dictionary is
    /// cleared — never left stale, never silently substituted — and every
    /// word passes through unchanged until a valid selection is made.
    /// Custom exceptions survive language changes.
    pub fn select_language(&self, code: &str) -> Result<()> {
        let code = normalize_code(code);
        if let Some(current) = self.language.load_full()
            && current.code() == code
        {
            return Ok(());
        }

        match builtin_resource(&code) {
            Some(json) => {
                let resource = match LanguageResource::from_json(&code, json) {
                    Ok(resource) => resource,
                    Err(e) => {
                        self.language.store(None);
                        return Err(e);
                    }
                };
                self.load_resource(&resource)
            }
            None => {
                self.language.store(None);
                tracing::warn!(message = "hyphenator.language_unsupported", code = %code);
                Err(HyphenationError::unsupported(code))
            }
        }
    }

    /// Activate a caller-provided resource (e.g. one loaded with
    /// [`LanguageResource::from_path`]). Clears the active dictionary if
    /// the resource fails to compile.
    pub fn load_resource(&self, resource: &LanguageResource) -> Result<()> {
        match LanguageSnapshot::build(resource) {
            Ok(snapshot) => {
                tracing::debug!(
                    message = "hyphenator.language_selected",
                    code = %snapshot.code(),
                    patterns = snapshot.patterns().len(),
                    exceptions = snapshot.exception_count()
                );
                self.language.store(Some(Arc::new(snapshot)));
                Ok(())
            }
            Err(e) => {
                self.language.store(None);
                tracing::warn!(message = "hyphenator.resource_rejected", error = %e);
                Err(e)
            }
        }
    }

    /// Canonical code of the active language, if any.
    #[must_use]
    pub fn active_language(&self) -> Option<String> {
        self.language.load_full().map(|s| s.code().to_string())
    }

    /// Handle to the active snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<LanguageSnapshot>> {
        self.language.load_full()
    }

    // ── Limits ──────────────────────────────────────────────────────────

    /// Minimum whole-word length (in characters) to attempt hyphenation.
    /// Zero is rejected and the previous value stays in force.
    pub fn set_min_length(&self, value: usize) -> Result<()> {
        self.set_limit("min_length", value, |l, v| l.min_length = v)
    }

    /// Minimum characters before the first break. Zero is rejected.
    pub fn set_min_before(&self, value: usize) -> Result<()> {
        self.set_limit("min_before", value, |l, v| l.min_before = v)
    }

    /// Minimum characters after the last break. Zero is rejected.
    pub fn set_min_after(&self, value: usize) -> Result<()> {
        self.set_limit("min_after", value, |l, v| l.min_after = v)
    }

    /// Current limits.
    #[must_use]
    pub fn limits(&self) -> Limits {
        **self.limits.load()
    }

    fn set_limit(
        &self,
        name: &'static str,
        value: usize,
        apply: impl Fn(&mut Limits, usize),
    ) -> Result<()> {
        if value == 0 {
            tracing::warn!(message = "hyphenator.limit_rejected", name, value);
            return Err(HyphenationError::InvalidLimit { name, value });
        }
        self.limits.rcu(|current| {
            let mut next = **current;
            apply(&mut next, value);
            next
        });
        Ok(())
    }

    // ── Custom exceptions ───────────────────────────────────────────────

    /// Register pre-hyphenated exception words (marker `-`), e.g.
    /// `["KING-desk", "Geschäfts-führung"]`.
    ///
    /// Entries accumulate across calls; a new entry for an existing key
    /// replaces it. Undecodable or empty entries are dropped individually
    /// without aborting the batch. Custom entries shadow built-in ones and
    /// survive language changes until [`Self::clear_custom_exceptions`].
    pub fn add_custom_exceptions<I, S>(&self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted: Vec<(String, Exception)> = Vec::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            if !is_decodable(entry) {
                tracing::warn!(
                    message = "hyphenator.exception_dropped",
                    layer = "custom",
                    reason = "undecodable"
                );
                continue;
            }
            match Exception::parse(entry) {
                Some((key, exception)) => accepted.push((key, exception)),
                None => {
                    tracing::warn!(
                        message = "hyphenator.exception_dropped",
                        layer = "custom",
                        reason = "empty"
                    );
                }
            }
        }
        if accepted.is_empty() {
            return;
        }
        self.custom.rcu(|current| {
            let mut next = ExceptionMap::clone(current);
            for (key, exception) in &accepted {
                next.insert(key.clone(), exception.clone());
            }
            next
        });
    }

    /// Register exceptions from a single string of entries separated by
    /// commas and/or whitespace, e.g. `"Hu-go, Fö-ba-ß"`.
    pub fn add_custom_exceptions_delimited(&self, entries: &str) {
        self.add_custom_exceptions(
            entries
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty()),
        );
    }

    /// Drop every custom exception. Built-in exceptions are unaffected.
    pub fn clear_custom_exceptions(&self) {
        self.custom.store(Arc::new(ExceptionMap::default()));
    }

    /// Marked form of the custom exception stored for `word`, if any.
    #[must_use]
    pub fn custom_exception(&self, word: &str) -> Option<String> {
        self.custom
            .load()
            .get(&word.to_lowercase())
            .map(|e| e.marked().to_string())
    }

    /// Number of registered custom exceptions.
    #[must_use]
    pub fn custom_exception_count(&self) -> usize {
        self.custom.load().len()
    }

    // ── Token processing ────────────────────────────────────────────────

    /// Insert `delimiter` at every accepted break point of every eligible
    /// word token.
    ///
    /// Pure with respect to the engine: tables and limits are read once as
    /// a consistent snapshot and never mutated. The output has the same
    /// length, order, and kinds as the input; ineligible tokens are
    /// returned verbatim. With no language selected, all tokens pass
    /// through.
    #[must_use]
    pub fn hyphenate(&self, tokens: &[Token], delimiter: &str, allow_title_case: bool) -> Vec<Token> {
        let snapshot = self.language.load_full();
        let custom = self.custom.load_full();
        let limits = self.limits();

        tokens
            .iter()
            .map(|token| {
                if token.kind() != TokenKind::Word {
                    return token.clone();
                }
                match hyphenate_word(
                    token.value(),
                    snapshot.as_deref(),
                    &custom,
                    &limits,
                    delimiter,
                    allow_title_case,
                ) {
                    Some(value) => token.with_value(value),
                    None => token.clone(),
                }
            })
            .collect()
    }
}

/// Embedded resource lookup; compiled out without `builtin-languages`.
#[cfg(feature = "builtin-languages")]
fn builtin_resource(code: &str) -> Option<&'static str> {
    softbreak_patterns::resource(code)
}

#[cfg(not(feature = "builtin-languages"))]
fn builtin_resource(_code: &str) -> Option<&'static str> {
    None
}

/// Apply the eligibility guards and dispatch to exceptions or pattern
/// segmentation. `None` means "leave the token unchanged".
fn hyphenate_word(
    word: &str,
    snapshot: Option<&LanguageSnapshot>,
    custom: &ExceptionMap,
    limits: &Limits,
    delimiter: &str,
    allow_title_case: bool,
) -> Option<String> {
    let snapshot = snapshot?;
    if !is_decodable(word) {
        return None;
    }
    if !allow_title_case && word.chars().next().is_some_and(char::is_uppercase) {
        return None;
    }
    let len = word.chars().count();
    if len < limits.min_length {
        return None;
    }

    let key = word.to_lowercase();
    if let Some(exception) = custom.get(&key).or_else(|| snapshot.exception(&key)) {
        let offsets: Vec<usize> = exception
            .offsets()
            .iter()
            .copied()
            .filter(|&offset| within_limits(offset, len, limits))
            .collect();
        if offsets.is_empty() {
            return None;
        }
        return Some(insert_delimiter(word, &offsets, delimiter));
    }

    let offsets = segment(word, snapshot.patterns(), limits);
    if offsets.is_empty() {
        return None;
    }
    Some(insert_delimiter(word, &offsets, delimiter))
}
