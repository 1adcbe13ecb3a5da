use crate::reports;
use clap::Args;
use dartforge::error::DfResult;
use dartforge::notation::{notation_from_value, value_from_notation, Target};

#[derive(Args, Debug, Clone)]
pub struct NotationArgs {
    /// Values (e.g. 57) or notations (e.g. T19, D-BULL).
    #[arg(required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

pub struct Conversion {
    pub input: String,
    pub notation: String,
    pub value: i32,
    pub class: Option<String>,
}

pub fn run(args: NotationArgs) -> DfResult<()> {
    let rows: Vec<Conversion> = args.tokens.iter().map(|t| convert(t)).collect();
    reports::print_conversions(&rows);
    Ok(())
}

fn convert(token: &str) -> Conversion {
    if let Ok(value) = token.trim().parse::<i32>() {
        return Conversion {
            input: token.to_string(),
            notation: notation_from_value(value),
            value,
            class: Target::from_value(value).map(|t| t.class().to_string()),
        };
    }

    // Lenient value, strict notation: "xT20" still scores 60 but is not echoed back.
    let parsed = token.parse::<Target>().ok();
    Conversion {
        input: token.to_string(),
        notation: parsed.map(|t| t.to_string()).unwrap_or_default(),
        value: value_from_notation(token),
        class: parsed.map(|t| t.class().to_string()),
    }
}
