#![forbid(unsafe_code)]

//! Liang-style hyphenation for tokenized text.
//!
//! Words are matched against a per-language pattern dictionary (the
//! TeX hyphenation algorithm): every substring of the boundary-wrapped
//! word is looked up in a trie, matched weight vectors merge by
//! elementwise maximum, and gaps with an odd merged weight become break
//! candidates, trimmed by positional limits. Whole-word exceptions —
//! built-in per language, or registered by the caller — override pattern
//! segmentation entirely.
//!
//! # Architecture
//!
//! ```text
//! resource (JSON) → LanguageSnapshot (trie + built-in exceptions),
//!                   swapped atomically on select_language
//! tokens → guards (decodable? title case? long enough?)
//!        → exception lookup (custom layer, then built-in)
//!        → pattern segmentation → delimiter insertion
//! ```
//!
//! Failure is always soft: unknown languages, undecodable tokens, and
//! rejected limit values all degrade to "the word is left unhyphenated",
//! never to a panic or to another language's rules.

pub mod error;
pub mod exception;
pub mod hyphenator;
pub mod language;
pub mod pattern;
pub mod segment;
pub mod token;

pub use error::{HyphenationError, Result};
pub use exception::Exception;
pub use hyphenator::Hyphenator;
pub use language::{LanguageResource, LanguageSnapshot, normalize_code};
pub use pattern::PatternSet;
pub use segment::{Limits, segment};
pub use token::{Token, TokenKind, is_decodable};
