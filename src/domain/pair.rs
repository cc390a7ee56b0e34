// ============================================================
// Layer 3 — Pair Domain Types
// ============================================================
// A paired line such as "為(uî)樂(lók)" is made of Pairs:
// one ideograph plus the phonetic transcription written in
// parentheses right after it.
//
//   "為(uî)樂(lók)"  →  [('為', "uî"), ('樂', "lók")]
//
// Order is reading order and must survive all the way into
// the rendered table columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One syllable's romanised transcription, e.g. `"uî"`, `"lók"`, `"xue2"`.
///
/// Immutable once built: the parser creates it and the classifier
/// and renderer only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneticToken(String);

impl PhoneticToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhoneticToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single (ideograph, phonetic) unit extracted from a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Always one character from the CJK Unified Ideographs block
    pub ideograph: char,

    pub phonetic: PhoneticToken,
}

impl Pair {
    pub fn new(ideograph: char, phonetic: impl Into<PhoneticToken>) -> Self {
        debug_assert!(is_cjk_ideograph(ideograph), "not an ideograph: {ideograph:?}");
        Self {
            ideograph,
            phonetic: phonetic.into(),
        }
    }
}

/// Returns true for characters in U+4E00..=U+9FFF.
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// The three ways a line of input can look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// At least one ideograph(phonetic) pair was found
    Paired(Vec<Pair>),

    /// Non-blank text without any pairs, kept verbatim
    PlainText(String),

    /// Empty or whitespace-only
    Blank,
}
