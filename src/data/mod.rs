// ============================================================
// Layer 4 — Input Pipeline
// ============================================================
// Everything between the raw input file and the per-line
// classification the layout layer works from:
//
//   .txt file
//       │
//       ▼
//   TextLoader     → strict UTF-8 decode, BOM strip, line split
//       │
//       ▼
//   line_parser    → ideograph(phonetic) pairs per line
//       │
//       ▼
//   Line::{Paired, PlainText, Blank}

/// Reads and decodes the input text file
pub mod loader;

/// Extracts ideograph(phonetic) pairs from a line
pub mod line_parser;
