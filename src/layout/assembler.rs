// ============================================================
// Layer 5 — Document Assembler
// ============================================================
// Walks the input lines in order and builds the OutputDocument:
//
//   Line::Paired     → Table block + Spacer block
//   Line::PlainText  → centered Paragraph with the raw line
//   Line::Blank      → empty Paragraph (keeps the spacing)
//
// No line is ever dropped, so the number of non-spacer blocks
// always equals the number of input lines. No state is carried
// from one line to the next except the document itself.

use crate::data::line_parser::classify_line;
use crate::domain::document::{Block, OutputDocument, ParagraphBlock};
use crate::domain::pair::Line;
use crate::domain::style::StyleConfig;
use crate::layout::row_renderer::RowRenderer;

pub struct DocumentAssembler {
    style: StyleConfig,
}

impl DocumentAssembler {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Convert all `lines` into a finished document.
    pub fn assemble<S: AsRef<str>>(&self, lines: &[S]) -> OutputDocument {
        // The default font is set before any block is added
        let mut doc   = OutputDocument::new(self.style.cjk_font.clone());
        let renderer  = RowRenderer::new(&self.style);
        let total     = lines.len();

        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            match classify_line(line) {
                Line::Paired(pairs) => {
                    tracing::debug!(line = i + 1, total, pairs = pairs.len(), "table");
                    if let Some(table) = renderer.render(&pairs) {
                        doc.push(Block::Table(table));
                        doc.push(renderer.spacer());
                    }
                }
                Line::PlainText(text) => {
                    tracing::debug!(line = i + 1, total, "paragraph");
                    doc.push(Block::Paragraph(ParagraphBlock::centered(text)));
                }
                Line::Blank => {
                    tracing::debug!(line = i + 1, total, "blank");
                    doc.push(Block::Paragraph(ParagraphBlock::empty()));
                }
            }
        }

        doc
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}
