// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `convert`, `classify`, and
// `init-style` and all their flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::application::convert_use_case::ConvertConfig;
use crate::domain::style::StyleConfig;
use crate::infra::style_store::load_style;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a text file of ideograph(phonetic) lines to .docx
    Convert(ConvertArgs),

    /// Print the tone color assigned to each phonetic token
    Classify(ClassifyArgs),

    /// Write the default style configuration as JSON
    InitStyle(InitStyleArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// UTF-8 text file to convert
    #[arg(long, short)]
    pub input: PathBuf,

    /// Output .docx path [default: 轉換結果_<input name>.docx next to the input]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// JSON style file (see `init-style`); flags below override it
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Typeface for the phonetic row
    #[arg(long)]
    pub latin_font: Option<String>,

    /// Typeface for the ideograph row and the document default
    #[arg(long)]
    pub cjk_font: Option<String>,
}

impl ConvertArgs {
    /// Resolve CLI args into the application-layer ConvertConfig.
    /// Not a plain `From` because reading the style file can fail.
    pub fn into_config(self) -> Result<ConvertConfig> {
        let mut style = match &self.style {
            Some(path) => load_style(path)
                .with_context(|| format!("Cannot load style '{}'", path.display()))?,
            None => StyleConfig::default(),
        };

        if let Some(font) = self.latin_font {
            style.latin_font = font;
        }
        if let Some(font) = self.cjk_font {
            style.cjk_font = font;
        }

        Ok(ConvertConfig {
            input:  self.input,
            output: self.output,
            style,
        })
    }
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Phonetic tokens, e.g. lók uî xué ma5
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

#[derive(Args, Debug)]
pub struct InitStyleArgs {
    /// Where to write the style file
    #[arg(long, short, default_value = "style.json")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::style_store::save_style;

    fn args(style: Option<PathBuf>, latin: Option<&str>) -> ConvertArgs {
        ConvertArgs {
            input:      PathBuf::from("in.txt"),
            output:     None,
            style,
            latin_font: latin.map(str::to_string),
            cjk_font:   None,
        }
    }

    #[test]
    fn test_defaults_without_style_file() {
        let cfg = args(None, None).into_config().unwrap();
        assert_eq!(cfg.style, StyleConfig::default());
        assert!(cfg.output.is_none());
    }

    #[test]
    fn test_flags_override_style_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");
        let file_style = StyleConfig {
            latin_font: "Georgia".to_string(),
            cjk_font:   "KaiTi".to_string(),
            ..StyleConfig::default()
        };
        save_style(&path, &file_style).unwrap();

        let cfg = args(Some(path), Some("Arial")).into_config().unwrap();
        assert_eq!(cfg.style.latin_font, "Arial");
        assert_eq!(cfg.style.cjk_font, "KaiTi");
    }

    #[test]
    fn test_missing_style_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(args(Some(dir.path().join("none.json")), None)
            .into_config()
            .is_err());
    }
}
