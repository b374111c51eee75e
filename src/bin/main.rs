use anyhow::{Context, Result};
use clap::Parser;
use flashcards_core::core::picker::PickOrder;
use flashcards_core::io::StreamIo;
use flashcards_core::{CommandLoop, SessionConfig, SessionEnd};
use log::LevelFilter;
use std::io::{stdin, stdout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "flashcards", version, about = "Interactive flashcard trainer")]
struct Cli {
    #[clap(long, help = "Load cards from this file before the first prompt")]
    import_from: Option<PathBuf>,

    #[clap(long, help = "Save cards to this file on exit")]
    export_to: Option<PathBuf>,

    #[clap(long, default_value = "random", help = "Card order for 'ask': random or sequential")]
    order: PickOrder,

    #[clap(long, help = "Seed for random card order, for reproducible sessions")]
    seed: Option<u64>,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the session text.
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let config = SessionConfig {
        import_from: cli.import_from,
        export_to: cli.export_to,
        order: cli.order,
        seed: cli.seed,
    };

    let console = StreamIo::new(stdin().lock(), stdout());
    let mut session = CommandLoop::new(console, config);
    let end = session.run().context("console I/O failed")?;
    if end == SessionEnd::EndOfInput {
        log::info!("Session ended without 'exit'");
    }
    Ok(())
}
