// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The core never touches files or formats. It gets lines from a
// LineSource and gives its finished document to a DocumentSink.
//
// Implementations:
//   - TextLoader  → LineSource   (UTF-8 text file on disk)
//   - DocxWriter  → DocumentSink (.docx via docx-rs)
//
// A different front end (web upload, GUI) only needs its own
// implementations of these two traits.

use crate::domain::document::OutputDocument;
use crate::domain::error::Result;

/// Anything that can supply decoded, newline-normalised text lines.
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>>;
}

/// Anything that can turn a finished document into bytes.
pub trait DocumentSink {
    /// Serialize the document. Takes ownership: the caller is done with it.
    fn serialize(&self, doc: OutputDocument) -> Result<Vec<u8>>;

    /// File extension for the produced format, without the dot.
    fn extension(&self) -> &'static str;
}
