// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Format and file concerns kept out of the layout core:
//
//   docx_writer.rs  — DocumentSink that packs the document into
//                     a .docx archive with docx-rs
//
//   style_store.rs  — StyleConfig persistence as JSON

/// .docx serialization
pub mod docx_writer;

/// StyleConfig JSON load/save
pub mod style_store;
