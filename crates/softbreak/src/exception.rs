#![forbid(unsafe_code)]

//! Exception words: author-specified break sequences that override
//! pattern segmentation.
//!
//! Entries arrive pre-hyphenated with the in-resource marker (`-`), e.g.
//! `"ta-ble"`. The marker-free lowercase form is the lookup key, so lookups
//! are case-insensitive; the break offsets are replayed against whatever
//! casing the matched token actually has.

use rustc_hash::FxHashMap;

/// Break marker used inside resource files and custom entries. Distinct
/// from the caller-supplied output delimiter.
pub const MARKER: char = '-';

/// One exception table layer, keyed by canonical lowercase word.
pub(crate) type ExceptionMap = FxHashMap<String, Exception>;

/// A parsed exception entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    marked: String,
    offsets: Vec<usize>,
}

impl Exception {
    /// Parse a marked word like `"hy-phen-ate"` into its canonical
    /// lowercase key and the entry.
    ///
    /// Markers at the very start of the word and runs of markers collapse
    /// to nothing (a break offset of zero is never valid). Returns `None`
    /// if the entry contains no characters besides markers.
    #[must_use]
    pub fn parse(marked: &str) -> Option<(String, Self)> {
        let mut stripped = String::with_capacity(marked.len());
        let mut offsets = Vec::new();
        let mut count = 0usize;

        for ch in marked.chars() {
            if ch == MARKER {
                if count > 0 && offsets.last() != Some(&count) {
                    offsets.push(count);
                }
            } else {
                stripped.push(ch);
                count += 1;
            }
        }

        if stripped.is_empty() {
            return None;
        }
        // a trailing marker marks no gap
        if offsets.last() == Some(&count) {
            offsets.pop();
        }

        let key = stripped.to_lowercase();
        Some((
            key,
            Self {
                marked: marked.to_string(),
                offsets,
            },
        ))
    }

    /// The entry as supplied, markers included.
    #[must_use]
    pub fn marked(&self) -> &str {
        &self.marked
    }

    /// Ascending character offsets of the marked breaks.
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}
