//! Fundscan CLI - classify fund PDFs and write sustainability reports.

use clap::Parser;
use fundscan_cli::{logging, Cli, Pipeline, Settings};
use fundscan_extractor::Extractor;
use fundscan_llm::OpenAiProvider;
use fundscan_report::ReportWriter;
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> fundscan_cli::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::load(&cli.config)?;
    let mut config = settings.extractor_config(cli.overflow.into())?;
    config.show_progress = !cli.no_progress;

    let provider = OpenAiProvider::with_timeout(settings.api_token()?, settings.request_timeout())?
        .with_base_url(settings.base_url());
    let extractor = Extractor::new(provider, config)?;

    let writer = ReportWriter::new(cli.output_dir.unwrap_or_else(|| settings.output_dir()));
    let output_dir = writer.output_dir().display().to_string();
    let pipeline = Pipeline::new(extractor, writer);

    let written = if cli.files.is_empty() {
        let input_dir = cli.input_dir.unwrap_or_else(|| settings.input_dir());
        info!("Scanning {} for PDF files", input_dir.display());
        pipeline.run_dir(&input_dir)?
    } else {
        pipeline.run(&cli.files)?
    };
    info!("{} reports written to {}", written.len(), output_dir);
    Ok(())
}
