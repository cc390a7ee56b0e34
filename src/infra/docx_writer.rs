// ============================================================
// Layer 6 — .docx Writer
// ============================================================
// Serializes an OutputDocument with the docx-rs crate.
//
// A .docx file is a ZIP archive of XML parts. docx-rs gives us a
// typed builder over that XML, and packs the archive for us:
//
//   OutputDocument            docx-rs
//   ──────────────            ───────
//   default_font         →    Docx::default_fonts(RunFonts)
//   Block::Table         →    Table → TableRow → TableCell → Paragraph → Run
//   Block::Paragraph     →    Paragraph (centered) → Run
//   Block::Spacer        →    empty Paragraph, exact line spacing
//
// Units: docx-rs run sizes are half-points, line spacing, grid
// widths, and cell margins are twentieths of a point (twips).
//
// Tables carry no borders and split the text column into equal
// grid columns, the same as an unstyled Word table.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, LineSpacing, LineSpacingType, Paragraph, Run, RunFonts, Table,
    TableAlignmentType, TableBorders, TableCell, TableCellMargins, TableRow, VAlignType,
};

use crate::domain::document::{Block, Cell, OutputDocument, ParagraphBlock, Row, TableBlock};
use crate::domain::error::{ConvertError, Result};
use crate::domain::traits::DocumentSink;

/// Width of the text column the table grid is divided across (6in)
const TEXT_WIDTH_TWIPS: usize = 8640;

pub struct DocxWriter;

impl DocxWriter {
    pub fn new() -> Self {
        Self
    }

    /// Build the docx-rs tree without packing it.
    pub fn build(&self, doc: &OutputDocument) -> Result<Docx> {
        let font = &doc.default_font;
        let mut docx = Docx::new().default_fonts(
            RunFonts::new().ascii(font).hi_ansi(font).east_asia(font),
        );

        for block in doc.blocks() {
            docx = match block {
                Block::Table(t)     => docx.add_table(table(t)),
                Block::Paragraph(p) => docx.add_paragraph(paragraph(p)),
                Block::Spacer { line_pt } => docx.add_paragraph(spacer(*line_pt)?),
            };
        }

        Ok(docx)
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSink for DocxWriter {
    fn serialize(&self, doc: OutputDocument) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());

        self.build(&doc)?
            .build()
            .pack(&mut buf)
            .map_err(|e| ConvertError::Serialize(e.to_string()))?;

        let bytes = buf.into_inner();
        tracing::debug!("Packed .docx archive ({} bytes)", bytes.len());
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "docx"
    }
}

fn table(t: &TableBlock) -> Table {
    let padding = t.cell_padding as usize;
    let columns = t.column_count().max(1);
    let table = Table::new(t.rows.iter().map(row).collect())
        .set_grid(vec![TEXT_WIDTH_TWIPS / columns; columns])
        .set_borders(TableBorders::with_empty())
        .margins(TableCellMargins::new().margin(padding, padding, padding, padding));

    if t.centered {
        table.align(TableAlignmentType::Center)
    } else {
        table
    }
}

fn row(r: &Row) -> TableRow {
    let row = TableRow::new(r.cells.iter().map(cell).collect());
    if r.cant_split {
        row.cant_split()
    } else {
        row
    }
}

fn cell(c: &Cell) -> TableCell {
    let mut fonts = RunFonts::new().ascii(&c.style.font).hi_ansi(&c.style.font);
    if let Some(ea) = &c.style.east_asia_font {
        fonts = fonts.east_asia(ea);
    }

    let mut run = Run::new()
        .add_text(&c.text)
        .size(c.style.size_pt as usize * 2)
        .fonts(fonts);
    if c.style.bold {
        run = run.bold();
    }
    if let Some(color) = c.style.color {
        run = run.color(color.hex());
    }

    // 240 = single line spacing
    let para = Paragraph::new()
        .add_run(run)
        .align(AlignmentType::Center)
        .line_spacing(
            LineSpacing::new()
                .line(240)
                .line_rule(LineSpacingType::Auto),
        );

    let cell = TableCell::new().add_paragraph(para);
    if c.vertical_center {
        cell.vertical_align(VAlignType::Center)
    } else {
        cell
    }
}

fn paragraph(p: &ParagraphBlock) -> Paragraph {
    let mut para = Paragraph::new();
    if let Some(text) = &p.text {
        para = para.add_run(Run::new().add_text(text));
    }
    if p.centered {
        para = para.align(AlignmentType::Center);
    }
    para
}

fn spacer(line_pt: u32) -> Result<Paragraph> {
    let out_of_range =
        || ConvertError::InvalidStyle(format!("spacer line height {line_pt}pt is too large"));
    let twips = line_pt.checked_mul(20).ok_or_else(out_of_range)?;

    Ok(Paragraph::new().line_spacing(
        LineSpacing::new()
            .line(twips.try_into().map_err(|_| out_of_range())?)
            .line_rule(LineSpacingType::Exact),
    ))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::assembler::DocumentAssembler;
    use docx_rs::{read_docx, DocumentChild};
    use regex::Regex;

    fn serialize(lines: &[&str]) -> Vec<u8> {
        let doc = DocumentAssembler::default().assemble(lines);
        DocxWriter::new().serialize(doc).unwrap()
    }

    #[test]
    fn test_output_is_a_zip_archive() {
        let bytes = serialize(&["為(uî)樂(lók)"]);
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_empty_document_still_packs() {
        let bytes = serialize(&[]);
        assert!(read_docx(&bytes).is_ok());
    }

    #[test]
    fn test_read_back_block_kinds() {
        let bytes = serialize(&["附錄說明", "學(xué)而(ér)", "", "為(uî)"]);
        let docx  = read_docx(&bytes).unwrap();

        let tables = docx
            .document
            .children
            .iter()
            .filter(|c| matches!(c, DocumentChild::Table(_)))
            .count();
        let paragraphs = docx
            .document
            .children
            .iter()
            .filter(|c| matches!(c, DocumentChild::Paragraph(_)))
            .count();

        assert_eq!(tables, 2);
        // text + blank + two spacers
        assert_eq!(paragraphs, 4);
    }

    /// word/document.xml for the given input lines
    fn document_xml(lines: &[&str]) -> String {
        let doc = DocumentAssembler::default().assemble(lines);
        let xml = DocxWriter::new().build(&doc).unwrap().build().document;
        String::from_utf8(xml).unwrap()
    }

    /// Markup of each `<w:tr>` element, in order
    fn table_rows(xml: &str) -> Vec<&str> {
        // <w:tr> or <w:tr ...>, but not <w:trPr>
        let re = Regex::new(r"<w:tr[\s>]").unwrap();
        re.split(xml)
            .skip(1)
            .map(|s| s.split("</w:tr>").next().unwrap_or(s))
            .collect()
    }

    #[test]
    fn test_phonetic_row_formatting_in_xml() {
        let xml  = document_xml(&["為(uî)樂(lók)"]);
        let rows = table_rows(&xml);
        assert_eq!(rows.len(), 2);

        let phonetic = rows[0];
        // uî → blue, lók → red, in column order
        let blue = phonetic.find(r#"<w:color w:val="0000FF""#).unwrap();
        let red  = phonetic.find(r#"<w:color w:val="FF0000""#).unwrap();
        assert!(blue < red);
        assert_eq!(phonetic.matches(r#"<w:sz w:val="22""#).count(), 2);
        assert_eq!(Regex::new(r"<w:b[\s/>]").unwrap().find_iter(phonetic).count(), 2);
        assert!(phonetic.contains("Times New Roman"));
    }

    #[test]
    fn test_ideograph_row_formatting_in_xml() {
        let xml       = document_xml(&["為(uî)樂(lók)"]);
        let ideograph = table_rows(&xml)[1];

        assert_eq!(ideograph.matches(r#"<w:sz w:val="40""#).count(), 2);
        assert_eq!(ideograph.matches(r#"w:eastAsia="標楷體""#).count(), 2);
        assert!(!ideograph.contains("<w:color"));
        assert!(!Regex::new(r"<w:b[\s/>]").unwrap().is_match(ideograph));
    }

    #[test]
    fn test_rows_and_cells_layout_in_xml() {
        let xml = document_xml(&["為(uî)樂(lók)"]);

        for row in table_rows(&xml) {
            assert!(row.contains("<w:cantSplit"));
            assert_eq!(row.matches(r#"<w:vAlign w:val="center""#).count(), 2);
        }
        assert!(xml.contains(r#"<w:jc w:val="center""#));
    }

    #[test]
    fn test_zero_cell_margins_in_xml() {
        let xml = document_xml(&["為(uî)"]);
        let mar = Regex::new(r"(?s)<w:tblCellMar>(.*?)</w:tblCellMar>")
            .unwrap()
            .captures(&xml)
            .unwrap()[1]
            .to_string();

        assert!(mar.contains(r#"w:w="0""#));
        assert!(!Regex::new(r#"w:w="[1-9]"#).unwrap().is_match(&mar));
    }

    #[test]
    fn test_tables_have_no_borders() {
        let xml = document_xml(&["為(uî)樂(lók)", "附錄"]);
        assert!(xml.contains("<w:tbl>") || xml.contains("<w:tbl "));
        assert!(!xml.contains(r#"w:val="single""#));
    }

    #[test]
    fn test_grid_has_one_equal_column_per_pair() {
        let xml = document_xml(&["為(uî)樂(lók)"]);
        assert_eq!(xml.matches("<w:gridCol").count(), 2);
        assert_eq!(xml.matches(r#"<w:gridCol w:w="4320""#).count(), 2);
    }

    #[test]
    fn test_spacer_is_exact_twelve_points() {
        let xml = document_xml(&["為(uî)"]);
        let spacings: Vec<&str> = Regex::new(r"<w:spacing [^>]*>")
            .unwrap()
            .find_iter(&xml)
            .map(|m| m.as_str())
            .collect();

        let exact: Vec<_> = spacings
            .iter()
            .filter(|s| s.contains(r#"w:lineRule="exact""#))
            .collect();
        assert_eq!(exact.len(), 1);
        assert!(exact[0].contains(r#"w:line="240""#));

        // both cell paragraphs use single spacing
        let auto = spacings
            .iter()
            .filter(|s| s.contains(r#"w:lineRule="auto""#) && s.contains(r#"w:line="240""#))
            .count();
        assert_eq!(auto, 2);
    }

    #[test]
    fn test_oversized_spacer_is_an_error() {
        let mut doc = OutputDocument::new("標楷體");
        doc.push(Block::Paragraph(ParagraphBlock::empty()));
        doc.push(Block::Spacer { line_pt: u32::MAX });

        let err = DocxWriter::new().serialize(doc).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidStyle(_)));
    }

    #[test]
    fn test_extension() {
        assert_eq!(DocxWriter::new().extension(), "docx");
    }
}
