use crate::reports;
use clap::Args;
use dartforge::api;
use dartforge::error::{DartForgeError, DfResult};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[arg(long, default_value_t = 2)]
    pub from: i32,

    #[arg(long, default_value_t = 170)]
    pub to: i32,

    /// Write the chart as CSV instead of printing it.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(args: ChartArgs) -> DfResult<()> {
    if args.from > args.to {
        return Err(DartForgeError::Config(format!(
            "--from ({}) is above --to ({})",
            args.from, args.to
        )));
    }

    info!("🧮 Charting scores {}..={}", args.from, args.to);
    let rows = api::build_chart(args.from, args.to);

    match args.csv {
        Some(path) => api::write_chart_csv(&path, &rows)?,
        None => reports::print_chart(&rows),
    }
    Ok(())
}
