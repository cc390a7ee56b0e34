// ============================================================
// Layer 3 — ToneColor
// ============================================================
// Only two colors are ever assigned to phonetic text:
//   Red  — checked tones and the marked (non-level) tones
//   Blue — tone 5 / circumflex family and the unmarked default

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneColor {
    Red,
    Blue,
}

impl ToneColor {
    /// RGB hex string in the form Word expects (no leading '#').
    pub fn hex(self) -> &'static str {
        match self {
            ToneColor::Red => "FF0000",
            ToneColor::Blue => "0000FF",
        }
    }
}

impl fmt::Display for ToneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneColor::Red => f.write_str("red"),
            ToneColor::Blue => f.write_str("blue"),
        }
    }
}
