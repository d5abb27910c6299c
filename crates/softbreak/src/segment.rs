#![forbid(unsafe_code)]

//! Segmentation: candidate break offsets for a single word.
//!
//! The word is wrapped in `.` boundary markers so edge patterns match
//! distinctly from interior ones, every pattern match is merged into a
//! per-gap weight array by elementwise maximum, and gaps with odd merged
//! weight become candidates. Candidates too close to either end of the
//! word, or falling inside a grapheme cluster, are discarded.

use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::pattern::PatternSet;

/// Word-edge marker; patterns may include it in their keys.
pub(crate) const BOUNDARY: char = '.';

/// Positional limits applied to candidate break offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Words shorter than this many characters are never hyphenated.
    pub min_length: usize,
    /// Characters that must remain before the first break.
    pub min_before: usize,
    /// Characters that must remain after the last break.
    pub min_after: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_length: 5,
            min_before: 2,
            min_after: 2,
        }
    }
}

/// Whether a break at `offset` keeps the required margins in a word of
/// `len` characters.
pub(crate) fn within_limits(offset: usize, len: usize, limits: &Limits) -> bool {
    offset >= limits.min_before && len.saturating_sub(offset) >= limits.min_after
}

/// Lowercase per character for pattern matching.
///
/// The rare characters whose lowercase form expands (e.g. `İ`) would shift
/// every later gap offset, so such words are reported unmappable.
fn fold_chars(word: &str) -> Option<Vec<char>> {
    let mut folded = Vec::with_capacity(word.len());
    for ch in word.chars() {
        let mut lower = ch.to_lowercase();
        let first = lower.next()?;
        if lower.next().is_some() {
            return None;
        }
        folded.push(first);
    }
    Some(folded)
}

/// Interior char offsets of `word` that fall on grapheme-cluster
/// boundaries. A delimiter inserted anywhere else would split a combining
/// sequence.
fn grapheme_boundary_offsets(word: &str) -> FxHashSet<usize> {
    let mut offsets = FxHashSet::default();
    let mut count = 0usize;
    for grapheme in word.graphemes(true) {
        if count > 0 {
            offsets.insert(count);
        }
        count += grapheme.chars().count();
    }
    offsets
}

/// Compute accepted break offsets for `word`, ascending and deduplicated.
///
/// Returns char offsets into the original word; a delimiter belongs
/// immediately before each offset's character.
#[must_use]
pub fn segment(word: &str, patterns: &PatternSet, limits: &Limits) -> Vec<usize> {
    let len = word.chars().count();
    if len < limits.min_length || patterns.is_empty() {
        return Vec::new();
    }
    let Some(folded) = fold_chars(word) else {
        return Vec::new();
    };

    let mut wrapped = Vec::with_capacity(len + 2);
    wrapped.push(BOUNDARY);
    wrapped.extend(folded);
    wrapped.push(BOUNDARY);

    // gaps[k] sits before wrapped[k]; the gap before word char t is
    // gaps[t + 1] (shifted by the leading boundary marker).
    let mut gaps = vec![0u8; wrapped.len() + 1];
    for start in 0..wrapped.len() {
        patterns.apply_at(&wrapped, start, &mut gaps);
    }

    let boundaries = grapheme_boundary_offsets(word);
    let mut offsets = Vec::new();
    for t in limits.min_before..=len.saturating_sub(limits.min_after) {
        if gaps[t + 1] % 2 == 1 && boundaries.contains(&t) {
            offsets.push(t);
        }
    }
    offsets
}

/// Insert `delimiter` before each offset. Offsets must be ascending and
/// unique; out-of-range offsets are ignored.
#[must_use]
pub(crate) fn insert_delimiter(word: &str, offsets: &[usize], delimiter: &str) -> String {
    if offsets.is_empty() {
        return word.to_string();
    }
    let mut out = String::with_capacity(word.len() + delimiter.len() * offsets.len());
    let mut pending = offsets.iter().peekable();
    for (t, ch) in word.chars().enumerate() {
        if pending.peek() == Some(&&t) {
            out.push_str(delimiter);
            pending.next();
        }
        out.push(ch);
    }
    out
}
