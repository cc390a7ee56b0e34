// ============================================================
// Layer 5 — Layout Core
// ============================================================
// The pure, synchronous heart of the converter. No I/O and no
// format knowledge; input is lines, output is an OutputDocument.
//
//   tone_classifier  → phonetic token → ToneColor
//   row_renderer     → pairs → 2-row TableBlock (+ spacer)
//   assembler        → lines → OutputDocument

pub mod tone_classifier;
pub mod row_renderer;
pub mod assembler;
