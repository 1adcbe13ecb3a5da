use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Checkout or setup advice for one remaining score.
    Advise(cmd::advise::AdviseArgs),
    /// Top suggestion for every score of a range.
    Chart(cmd::chart::ChartArgs),
    /// Convert between values and target notation.
    Notation(cmd::notation::NotationArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🎯 DartForge {}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Advise(args) => cmd::advise::run(args),
        Commands::Chart(args) => cmd::chart::run(args),
        Commands::Notation(args) => cmd::notation::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
