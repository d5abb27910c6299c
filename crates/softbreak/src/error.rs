#![forbid(unsafe_code)]

//! Error taxonomy for the hyphenation engine.
//!
//! Nothing here is fatal to a caller's text pipeline: an unsupported
//! language or a rejected limit leaves the engine in a state where words
//! simply pass through unhyphenated.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HyphenationError>;

#[derive(Debug, Error)]
pub enum HyphenationError {
    /// No resource is registered for the requested language code. The
    /// active dictionary has been cleared; words pass through unchanged
    /// until a valid language is selected.
    #[error("no hyphenation resource for language: {code}")]
    UnsupportedLanguage { code: String },

    /// A language resource failed to parse or validate. Treated like an
    /// unsupported language: the active dictionary is cleared.
    #[error("malformed hyphenation resource for {code}: {reason}")]
    MalformedResource { code: String, reason: String },

    /// I/O failure while reading a resource file.
    #[error("failed to read hyphenation resource: {0}")]
    Io(#[from] std::io::Error),

    /// A limit setter rejected its value; the previous value stays in
    /// force.
    #[error("{name} must be at least 1 (got {value})")]
    InvalidLimit { name: &'static str, value: usize },
}

impl HyphenationError {
    #[must_use]
    pub fn unsupported(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { code: code.into() }
    }

    #[must_use]
    pub fn malformed(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResource {
            code: code.into(),
            reason: reason.into(),
        }
    }
}
