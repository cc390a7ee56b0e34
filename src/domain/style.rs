// ============================================================
// Layer 3 — Style Configuration
// ============================================================
// The fixed typefaces and sizes used when rendering. This value
// is passed into the DocumentAssembler when it is built; nothing
// reads a module-level default font.
//
// Serialisable so a style can be loaded from a JSON file
// (see infra::style_store).

use serde::{Deserialize, Serialize};

use crate::domain::error::{ConvertError, Result};

/// Largest spacer height whose twip value (pt × 20) fits an i32
pub const MAX_SPACER_LINE_PT: u32 = i32::MAX as u32 / 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Typeface for the phonetic row
    pub latin_font: String,

    /// Typeface for the ideograph row and the document default
    pub cjk_font: String,

    pub phonetic_size_pt: u32,
    pub ideograph_size_pt: u32,

    /// Exact line height of the spacer paragraph after each table
    pub spacer_line_pt: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            latin_font:        "Times New Roman".to_string(),
            cjk_font:          "標楷體".to_string(),
            phonetic_size_pt:  11,
            ideograph_size_pt: 20,
            spacer_line_pt:    12,
        }
    }
}

impl StyleConfig {
    /// Reject sizes that cannot be written to a document.
    pub fn validate(&self) -> Result<()> {
        if self.phonetic_size_pt == 0 || self.ideograph_size_pt == 0 {
            return Err(ConvertError::InvalidStyle(
                "font sizes must be at least 1pt".to_string(),
            ));
        }
        if self.spacer_line_pt > MAX_SPACER_LINE_PT {
            return Err(ConvertError::InvalidStyle(format!(
                "spacer_line_pt {} exceeds {MAX_SPACER_LINE_PT}",
                self.spacer_line_pt
            )));
        }
        Ok(())
    }
}
