use crate::error::{DartForgeError, DfResult};
use clap::{Args, ValueEnum};
use strum_macros::Display;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub limits: ScoreLimits,
    #[command(flatten)]
    pub output: OutputOptions,
}

/// Accepted range for user-entered scores. The solver itself is total;
/// these bounds only gate the presentation layer.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLimits {
    #[arg(long, default_value_t = 2)]
    pub min_score: i32,
    #[arg(long, default_value_t = 501)]
    pub max_score: i32,
}

impl Default for ScoreLimits {
    fn default() -> Self {
        Self {
            min_score: 2,
            max_score: 501,
        }
    }
}

impl ScoreLimits {
    pub fn validate(&self) -> DfResult<()> {
        if self.min_score < 1 {
            return Err(DartForgeError::Config(format!(
                "--min-score must be at least 1 (got {})",
                self.min_score
            )));
        }
        if self.min_score > self.max_score {
            return Err(DartForgeError::Config(format!(
                "--min-score ({}) is above --max-score ({})",
                self.min_score, self.max_score
            )));
        }
        Ok(())
    }

    pub fn contains(&self, score: i32) -> bool {
        (self.min_score..=self.max_score).contains(&score)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Display, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Plain,
    Json,
}
