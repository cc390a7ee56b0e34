// ============================================================
// Layer 4 — Text Loader
// ============================================================
// Reads a plain-text input file and turns it into lines.
//
// Decoding is strict: a file that is not valid UTF-8 is a fatal
// input error reported before any line is processed. There is no
// lossy fallback, because replacement characters would end up
// silently printed into the document.
//
// Normalisation:
//   - a leading byte order mark (U+FEFF) is removed
//   - "\r\n" and "\n" both end a line
//   - a trailing newline does not produce an extra empty line

use std::{fs, path::PathBuf};

use crate::domain::error::{ConvertError, Result};
use crate::domain::traits::LineSource;

/// Loads lines from a UTF-8 text file on disk.
pub struct TextLoader {
    path: PathBuf,
}

impl TextLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for TextLoader {
    fn read_lines(&self) -> Result<Vec<String>> {
        let bytes = fs::read(&self.path)?;
        tracing::debug!("Read {} bytes from '{}'", bytes.len(), self.path.display());
        decode_lines(&bytes)
    }
}

/// Decode raw bytes into normalised lines.
///
/// Usable on its own by front ends that receive the bytes in
/// memory (e.g. an upload) instead of from a path.
pub fn decode_lines(bytes: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes).map_err(|e| ConvertError::Decode {
        offset: e.valid_up_to(),
    })?;

    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    // str::lines() splits on "\n" and strips a trailing "\r"; a lone
    // "\r" (classic Mac line ending) is NOT a break, so a CR-only file
    // comes through as a single line
    Ok(text.lines().map(str::to_string).collect())
}
