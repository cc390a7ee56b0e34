// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: these types call into the data,
// layout, and infra layers in order, and never do layout or
// printing themselves (printing belongs to Layer 1).

// Text file → .docx conversion
pub mod convert_use_case;

// Tone classification of individual tokens
pub mod classify_use_case;
