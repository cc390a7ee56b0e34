// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing what a
// converted document IS, independent of how it gets written.
//
// Rules for this layer:
//   - NO docx-rs types allowed here
//   - NO file I/O
//   - Only plain data and the seams (traits) other layers implement
//
// The .docx serializer in Layer 6 is the only place that knows
// about the on-disk format.

// Ideograph/phonetic pairs and line classification
pub mod pair;

// The two tone colors
pub mod tone;

// The in-memory output document (ordered block list)
pub mod document;

// Fixed typefaces and sizes, passed explicitly into the assembler
pub mod style;

// Typed errors for the conversion pipeline
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
