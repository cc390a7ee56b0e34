// ============================================================
// Layer 6 — Style Store
// ============================================================
// Saves and loads a StyleConfig as JSON so a run can be
// reproduced with the same fonts and sizes.
//
// Example style.json:
//   {
//     "latin_font": "Times New Roman",
//     "cjk_font": "標楷體",
//     "phonetic_size_pt": 11,
//     "ideograph_size_pt": 20,
//     "spacer_line_pt": 12
//   }
//
// Missing keys fall back to the defaults.

use std::{fs, path::Path};

use crate::domain::error::Result;
use crate::domain::style::StyleConfig;

pub fn load_style(path: &Path) -> Result<StyleConfig> {
    let json = fs::read_to_string(path)?;
    let cfg: StyleConfig = serde_json::from_str(&json)?;
    cfg.validate()?;
    tracing::debug!("Loaded style from '{}'", path.display());
    Ok(cfg)
}

pub fn save_style(path: &Path, cfg: &StyleConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)?;
    tracing::debug!("Saved style to '{}'", path.display());
    Ok(())
}
