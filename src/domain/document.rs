// ============================================================
// Layer 3 — Output Document
// ============================================================
// The in-memory result of a conversion: an ordered list of
// block elements. The assembler is the only writer; once it is
// finished the document is moved to the caller, who hands it to
// a DocumentSink (e.g. the .docx writer) for serialization.
//
//   OutputDocument
//     ├── default_font
//     └── blocks: Vec<Block>
//           ├── Table      → rows → cells → styled text
//           ├── Paragraph  → optional centered text
//           └── Spacer     → fixed-height empty paragraph

use crate::domain::tone::ToneColor;

/// Character formatting for the text inside one table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Typeface for Latin script
    pub font: String,

    /// Typeface for East-Asian script, when it must be set explicitly
    pub east_asia_font: Option<String>,

    /// Size in points
    pub size_pt: u32,

    pub bold: bool,

    /// None means "inherit the document color"
    pub color: Option<ToneColor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub style: TextStyle,
    pub vertical_center: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,

    /// When true the row may not break across a page boundary
    pub cant_split: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub rows: Vec<Row>,

    /// Padding inside every cell, in twentieths of a point
    pub cell_padding: u32,

    pub centered: bool,
}

impl TableBlock {
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |r| r.cells.len())
    }
}

#[cfg(test)]
impl TableBlock {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Text of every cell in row `idx`, left to right.
    pub fn row_texts(&self, idx: usize) -> Vec<&str> {
        self.rows
            .get(idx)
            .map(|r| r.cells.iter().map(|c| c.text.as_str()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphBlock {
    /// None for an empty paragraph (a preserved blank line)
    pub text: Option<String>,
    pub centered: bool,
}

impl ParagraphBlock {
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            centered: true,
        }
    }

    pub fn empty() -> Self {
        Self {
            text: None,
            centered: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Table(TableBlock),
    Paragraph(ParagraphBlock),

    /// Empty paragraph with exact line spacing, in points
    Spacer { line_pt: u32 },
}

#[cfg(test)]
impl Block {
    /// Spacers trail a table; everything else stands for one input line.
    pub fn is_primary(&self) -> bool {
        !matches!(self, Block::Spacer { .. })
    }
}

/// Counts of each kind of block, printed after a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub tables: usize,
    pub text_paragraphs: usize,
    pub empty_paragraphs: usize,
    pub spacers: usize,
}

impl Summary {
    pub fn primary_blocks(&self) -> usize {
        self.tables + self.text_paragraphs + self.empty_paragraphs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    /// Document-wide default typeface (both Latin and East-Asian slots)
    pub default_font: String,

    blocks: Vec<Block>,
}

impl OutputDocument {
    pub fn new(default_font: impl Into<String>) -> Self {
        Self {
            default_font: default_font.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let mut s = Summary::default();
        for block in &self.blocks {
            match block {
                Block::Table(_) => s.tables += 1,
                Block::Paragraph(p) if p.is_empty() => s.empty_paragraphs += 1,
                Block::Paragraph(_) => s.text_paragraphs += 1,
                Block::Spacer { .. } => s.spacers += 1,
            }
        }
        s
    }
}
