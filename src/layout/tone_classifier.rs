// ============================================================
// Layer 5 — Tone Classifier
// ============================================================
// Maps a phonetic token to the color its text is printed in.
//
// The token is trimmed and lowercased, then checked against an
// ordered rule table. The FIRST rule that matches decides the
// color. The rules overlap (e.g. "hok5" ends with k AND with 5),
// so their order is part of the behaviour:
//
//   #  rule                                           color
//   1  ends with 5, or carries a circumflex           Blue
//   2  ends with p / t / k (checked syllable)         Red
//   3  carries a tone diacritic, or ends with         Red
//      2 3 4 6 7 8
//   4  anything else                                  Blue
//
// Every string maps to exactly one color; "" falls to rule 4.
//
// Classification gaps:
//   A token that reaches rule 4 while still carrying a diacritic
//   we do not recognise (e.g. "ǘ", "ń") is still Blue, but the
//   diacritic is reported back (and logged at warn) so it can be
//   surfaced instead of disappearing into the default.

use crate::domain::tone::ToneColor;

/// Circumflex vowels and standalone carets (rule 1).
const CIRCUMFLEX_MARKS: &[char] = &[
    'â', 'ê', 'î', 'ô', 'û',
    '\u{0302}', // combining circumflex
    'ˆ', '^',
];

/// Acute, grave, macron, caron vowels and combining tone marks
/// (rule 3). Union of every mark seen in the input corpus.
const TONE_MARKS: &[char] = &[
    'á', 'à', 'ā', 'ǎ',
    'í', 'ì', 'ī', 'ǐ',
    'ú', 'ù', 'ū', 'ǔ',
    'é', 'è', 'ē', 'ě',
    'ó', 'ò', 'ō', 'ǒ',
    '\u{030D}', // vertical line above (tone 8)
    '\u{0301}', // acute
    '\u{0300}', // grave
    '\u{030C}', // caron
    '\u{0304}', // macron
];

/// Letters and marks outside ASCII that describe vowel quality
/// rather than tone. Never reported as gaps.
const NON_TONE_MARKS: &[char] = &[
    'ü', 'ṳ', 'ŋ', 'ø', 'æ', 'œ', 'ß', 'ı',
    '\u{0308}', // diaeresis
    '\u{0324}', // diaeresis below
    '\u{0358}', // dot above right (o͘)
];

/// Identifies which rule produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneRule {
    LevelMark,
    CheckedEnding,
    ToneMark,
    Default,
}

struct Rule {
    id:      ToneRule,
    applies: fn(&str) -> bool,
    color:   ToneColor,
}

/// Evaluated top to bottom; the last entry always applies.
const RULES: &[Rule] = &[
    Rule { id: ToneRule::LevelMark,     applies: is_level_marked,  color: ToneColor::Blue },
    Rule { id: ToneRule::CheckedEnding, applies: is_checked,       color: ToneColor::Red  },
    Rule { id: ToneRule::ToneMark,      applies: is_tone_marked,   color: ToneColor::Red  },
    Rule { id: ToneRule::Default,       applies: always,           color: ToneColor::Blue },
];

fn always(_: &str) -> bool {
    true
}

fn is_level_marked(py: &str) -> bool {
    py.ends_with('5') || py.contains(CIRCUMFLEX_MARKS)
}

fn is_checked(py: &str) -> bool {
    py.ends_with(['p', 't', 'k'])
}

fn is_tone_marked(py: &str) -> bool {
    py.contains(TONE_MARKS) || py.ends_with(['2', '3', '4', '6', '7', '8'])
}

/// Result of classifying one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub color: ToneColor,
    pub rule:  ToneRule,

    /// First unrecognised diacritic, only set when the default rule fired
    pub gap: Option<char>,
}

/// Classify a phonetic token. Total: never fails.
pub fn classify(phonetic: &str) -> ToneColor {
    classify_detailed(phonetic).color
}

/// Classify and report which rule matched plus any classification gap.
pub fn classify_detailed(phonetic: &str) -> Classification {
    let py = phonetic.trim().to_lowercase();

    let rule = RULES
        .iter()
        .find(|r| (r.applies)(&py))
        .unwrap_or(&RULES[RULES.len() - 1]);

    let gap = match rule.id {
        ToneRule::Default => py.chars().find(|&c| is_unknown_diacritic(c)),
        _ => None,
    };

    if let Some(mark) = gap {
        tracing::warn!(
            phonetic = %phonetic,
            mark = %mark.escape_unicode(),
            "Unrecognised diacritic, defaulting to {}",
            rule.color
        );
    }

    Classification { color: rule.color, rule: rule.id, gap }
}

fn is_unknown_diacritic(c: char) -> bool {
    if NON_TONE_MARKS.contains(&c) {
        return false;
    }
    matches!(c,
        '\u{0300}'..='\u{036F}'   // combining diacritical marks
        | '\u{00C0}'..='\u{024F}' // Latin-1 supplement, Extended-A/B
        | '\u{1E00}'..='\u{1EFF}' // Latin Extended Additional
    ) && !matches!(c, '\u{00D7}' | '\u{00F7}') // × ÷
}
