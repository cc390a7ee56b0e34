// ============================================================
// Layer 4 — Line Parser
// ============================================================
// Finds "ideograph(phonetic)" pairs in a line of text.
//
// Pattern: one character from U+4E00..=U+9FFF, then "(", then
// one or more characters that are not ")", then ")".
//
//   "子曰：學(xué)而(ér)時(shí)"
//        │    └──┬──┘
//        │    ignored (no parenthesis right after 曰 or ：)
//        ▼
//   [('學',"xué"), ('而',"ér"), ('時',"shí")]
//
// Text between matches is dropped. A line with no matches is
// not an error; the caller decides whether it is plain text
// or blank.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::pair::{Line, Pair};

static RE_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\x{4E00}-\x{9FFF}])\(([^)]+)\)").unwrap());

/// Extract all pairs from `line`, left to right.
pub fn parse(line: &str) -> Vec<Pair> {
    RE_PAIR
        .captures_iter(line)
        .filter_map(|caps| {
            let ideograph = caps.get(1)?.as_str().chars().next()?;
            let phonetic  = caps.get(2)?.as_str();
            Some(Pair::new(ideograph, phonetic))
        })
        .collect()
}

/// Three-way classification of an input line.
pub fn classify_line(line: &str) -> Line {
    let pairs = parse(line);
    if !pairs.is_empty() {
        Line::Paired(pairs)
    } else if !line.trim().is_empty() {
        Line::PlainText(line.to_string())
    } else {
        Line::Blank
    }
}
