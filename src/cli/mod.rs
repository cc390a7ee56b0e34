// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// A thin adapter over the shared core: parses arguments with
// clap, hands off to a use case, prints the result. Any other
// front end (web upload, desktop) would sit beside this one and
// call the same use cases.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ClassifyArgs, Commands, ConvertArgs, InitStyleArgs};

use crate::application::classify_use_case::ClassifyUseCase;
use crate::application::convert_use_case::ConvertUseCase;
use crate::domain::style::StyleConfig;
use crate::infra::style_store::save_style;

#[derive(Parser, Debug)]
#[command(
    name = "phonetic-grid",
    version,
    about = "Turn ideograph(phonetic) text into tone-colored .docx tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Convert(args)   => run_convert(args),
            Commands::Classify(args)  => run_classify(args),
            Commands::InitStyle(args) => run_init_style(args),
        }
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let config = args.into_config()?;
    tracing::info!("Converting '{}'", config.input.display());

    let report = ConvertUseCase::new(config).execute()?;
    let s      = report.summary;

    println!("Converted {} lines → {}", report.lines, report.output.display());
    println!(
        "  {} tables, {} text paragraphs, {} blank lines",
        s.tables, s.text_paragraphs, s.empty_paragraphs
    );
    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let results = ClassifyUseCase::run(&args.tokens);

    for (token, c) in &results {
        println!("{token}\t{}\t{:?}", c.color, c.rule);
    }

    let gaps = ClassifyUseCase::gaps(&results);
    if !gaps.is_empty() {
        println!();
        for (token, mark) in gaps {
            println!("unclassified diacritic {} in '{token}'", mark.escape_unicode());
        }
    }
    Ok(())
}

fn run_init_style(args: InitStyleArgs) -> Result<()> {
    save_style(&args.output, &StyleConfig::default())?;
    println!("Wrote default style to {}", args.output.display());
    Ok(())
}
