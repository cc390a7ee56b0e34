// ============================================================
// Layer 2 — ConvertUseCase
// ============================================================
// Orchestrates one conversion end to end:
//
//   Step 1: Read + decode the input lines   (Layer 4 - data)
//   Step 2: Assemble the document           (Layer 5 - layout)
//   Step 3: Serialize to .docx              (Layer 6 - infra)
//   Step 4: Write the output file
//
// Decoding happens before anything else, so invalid input never
// produces a partial document.

use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};

use crate::data::loader::TextLoader;
use crate::domain::document::{OutputDocument, Summary};
use crate::domain::style::StyleConfig;
use crate::domain::traits::{DocumentSink, LineSource};
use crate::infra::docx_writer::DocxWriter;
use crate::layout::assembler::DocumentAssembler;

/// Prefix of the default output file name ("conversion result")
const OUTPUT_PREFIX: &str = "轉換結果_";

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input:  PathBuf,

    /// None → derived from the input name, see `default_output_path`
    pub output: Option<PathBuf>,

    pub style:  StyleConfig,
}

/// What a finished conversion produced.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub output:  PathBuf,
    pub lines:   usize,
    pub summary: Summary,
}

pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Run with the standard text loader and .docx writer.
    pub fn execute(&self) -> Result<ConvertReport> {
        let loader = TextLoader::new(&self.config.input);
        let writer = DocxWriter::new();
        self.execute_with(&loader, &writer)
    }

    /// Run with any source and sink.
    pub fn execute_with(
        &self,
        source: &dyn LineSource,
        sink:   &dyn DocumentSink,
    ) -> Result<ConvertReport> {
        let cfg = &self.config;
        cfg.style.validate().context("Invalid style")?;

        // ── Step 1: Read and decode ───────────────────────────────────────────
        let lines = source
            .read_lines()
            .with_context(|| format!("Cannot read input '{}'", cfg.input.display()))?;
        tracing::info!("Read {} lines from '{}'", lines.len(), cfg.input.display());

        // ── Step 2: Assemble ──────────────────────────────────────────────────
        let doc: OutputDocument = DocumentAssembler::new(cfg.style.clone()).assemble(&lines);
        if doc.is_empty() {
            tracing::warn!("Input has no lines; writing an empty document");
        }
        let summary = doc.summary();
        debug_assert_eq!(summary.primary_blocks(), lines.len());
        tracing::info!(
            tables = summary.tables,
            paragraphs = summary.text_paragraphs,
            blank = summary.empty_paragraphs,
            spacers = summary.spacers,
            "Assembled document"
        );

        // ── Step 3: Serialize ─────────────────────────────────────────────────
        // The document is moved into the sink; we are done with it
        let bytes = sink.serialize(doc).context("Cannot serialize document")?;

        // ── Step 4: Write ─────────────────────────────────────────────────────
        let output = match &cfg.output {
            Some(path) => path.clone(),
            None => default_output_path(&cfg.input, sink.extension()),
        };
        fs::write(&output, &bytes)
            .with_context(|| format!("Cannot write output '{}'", output.display()))?;
        tracing::info!("Wrote '{}'", output.display());

        Ok(ConvertReport {
            output,
            lines: lines.len(),
            summary,
        })
    }
}

/// `dir/name.txt` → `dir/轉換結果_name.<ext>`
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{OUTPUT_PREFIX}{stem}.{extension}"))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{self, ConvertError};

    /// Sink that records nothing and emits a fixed payload
    struct FixedSink;

    impl DocumentSink for FixedSink {
        fn serialize(&self, doc: OutputDocument) -> error::Result<Vec<u8>> {
            Ok(format!("{} blocks", doc.blocks().len()).into_bytes())
        }

        fn extension(&self) -> &'static str {
            "txt"
        }
    }

    struct BrokenSource;

    impl LineSource for BrokenSource {
        fn read_lines(&self) -> error::Result<Vec<String>> {
            Err(ConvertError::Decode { offset: 0 })
        }
    }

    fn config(input: PathBuf, output: Option<PathBuf>) -> ConvertConfig {
        ConvertConfig { input, output, style: StyleConfig::default() }
    }

    #[test]
    fn test_default_output_path() {
        let p = default_output_path(Path::new("/tmp/lunyu.txt"), "docx");
        assert_eq!(p, PathBuf::from("/tmp/轉換結果_lunyu.docx"));
    }

    #[test]
    fn test_end_to_end_writes_docx() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("lunyu.txt");
        fs::write(&input, "學(xué)而(ér)時(shí)習(xí)之(zhī)\n\n附錄說明\n").unwrap();

        let report = ConvertUseCase::new(config(input, None)).execute().unwrap();

        assert_eq!(report.output, dir.path().join("轉換結果_lunyu.docx"));
        assert_eq!(report.lines, 3);
        assert_eq!(report.summary.tables, 1);
        assert_eq!(report.summary.primary_blocks(), 3);

        let bytes = fs::read(&report.output).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_custom_sink_and_output() {
        let dir    = tempfile::tempdir().unwrap();
        let input  = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "為(uî)\n附錄").unwrap();

        let uc = ConvertUseCase::new(config(input.clone(), Some(output.clone())));
        uc.execute_with(&TextLoader::new(&input), &FixedSink).unwrap();

        // table + spacer + paragraph
        assert_eq!(fs::read_to_string(output).unwrap(), "3 blocks");
    }

    #[test]
    fn test_invalid_utf8_writes_nothing() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        fs::write(&input, [0x66, 0xFF, 0x0A]).unwrap();

        let result = ConvertUseCase::new(config(input, None)).execute();

        assert!(result.is_err());
        assert!(!dir.path().join("轉換結果_bad.docx").exists());
    }

    #[test]
    fn test_source_error_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let uc  = ConvertUseCase::new(config(dir.path().join("x.txt"), None));

        let err = uc.execute_with(&BrokenSource, &FixedSink).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::Decode { .. })
        ));
    }

    #[test]
    fn test_invalid_style_is_rejected_before_reading() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "為(uî)").unwrap();

        let mut cfg = config(input, None);
        cfg.style.phonetic_size_pt = 0;

        let err = ConvertUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::InvalidStyle(_))
        ));
        assert!(!dir.path().join("轉換結果_in.docx").exists());
    }
}
