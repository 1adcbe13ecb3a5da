use crate::reports;
use clap::Args;
use dartforge::api;
use dartforge::config::{Config, OutputFormat};
use dartforge::error::DfResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AdviseArgs {
    /// Remaining score, as typed by the player.
    #[arg(allow_hyphen_values = true)]
    pub score: String,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: AdviseArgs) -> DfResult<()> {
    args.config.limits.validate()?;

    let advice = api::advise(&args.score, &args.config.limits)?;
    info!(
        "📋 {} option(s) for {}",
        advice.options.len(),
        advice.score
    );

    match args.config.output.format {
        OutputFormat::Table => reports::print_advice(&advice),
        OutputFormat::Plain => reports::print_advice_plain(&advice),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&advice)?),
    }
    Ok(())
}
