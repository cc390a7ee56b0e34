// ============================================================
// Layer 5 — Row Renderer
// ============================================================
// Lays out one paired line as a 2-row table:
//
//        col 0   col 1   col 2
//      ┌───────┬───────┬───────┐
//   0  │  uî   │  lók  │  ...  │  phonetic, 11pt Latin, bold, tone color
//      ├───────┼───────┼───────┤
//   1  │  為   │  樂   │  ...  │  ideograph, 20pt CJK
//      └───────┴───────┴───────┘
//
// Every cell is centered both ways with zero padding, rows never
// split across pages, and the whole table is centered on the page.
// A spacer block follows each table.

use crate::domain::document::{Block, Cell, Row, TableBlock, TextStyle};
use crate::domain::pair::Pair;
use crate::domain::style::StyleConfig;
use crate::layout::tone_classifier;

pub struct RowRenderer<'a> {
    style: &'a StyleConfig,
}

impl<'a> RowRenderer<'a> {
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Build the table for `pairs`. Returns None for an empty slice,
    /// so a zero-column table can never be produced.
    pub fn render(&self, pairs: &[Pair]) -> Option<TableBlock> {
        if pairs.is_empty() {
            return None;
        }

        let phonetic_row = Row {
            cells: pairs.iter().map(|p| self.phonetic_cell(p)).collect(),
            cant_split: true,
        };
        let ideograph_row = Row {
            cells: pairs.iter().map(|p| self.ideograph_cell(p)).collect(),
            cant_split: true,
        };

        Some(TableBlock {
            rows: vec![phonetic_row, ideograph_row],
            cell_padding: 0,
            centered: true,
        })
    }

    /// The fixed-height block appended after every table.
    pub fn spacer(&self) -> Block {
        Block::Spacer { line_pt: self.style.spacer_line_pt }
    }

    fn phonetic_cell(&self, pair: &Pair) -> Cell {
        let text = pair.phonetic.as_str();

        Cell {
            text: text.to_string(),
            style: TextStyle {
                font:           self.style.latin_font.clone(),
                east_asia_font: None,
                size_pt:        self.style.phonetic_size_pt,
                bold:           true,
                color:          Some(tone_classifier::classify(text)),
            },
            vertical_center: true,
        }
    }

    fn ideograph_cell(&self, pair: &Pair) -> Cell {
        Cell {
            text: pair.ideograph.to_string(),
            style: TextStyle {
                font:           self.style.cjk_font.clone(),
                east_asia_font: Some(self.style.cjk_font.clone()),
                size_pt:        self.style.ideograph_size_pt,
                bold:           false,
                color:          None,
            },
            vertical_center: true,
        }
    }
}
