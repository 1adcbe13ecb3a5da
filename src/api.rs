use crate::config::ScoreLimits;
use crate::error::{DartForgeError, DfResult};
use crate::notation::Target;
use crate::solver::{find_checkouts, solve_score, ThrowSequence, MAX_CHECKOUT};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Score is within reach of a three-dart finish.
    Checkout,
    /// Score is above 170: just pile on points.
    Accumulation,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainderKind {
    /// "Score restant"
    Remaining,
    /// "Score laissé"
    Left,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DartStep {
    pub target: Target,
    pub remaining: i32,
    pub kind: RemainderKind,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdviceOption {
    pub title: String,
    pub is_checkout: bool,
    pub darts_thrown: usize,
    /// Score after the thrown darts (0 for a checkout).
    pub score_left: i32,
    pub sequence: ThrowSequence,
    pub steps: Vec<DartStep>,
    pub note: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub score: i32,
    pub regime: Regime,
    pub heading: String,
    pub guidance: Vec<String>,
    pub options: Vec<AdviceOption>,
    /// Set only when no option could be produced.
    pub fallback: Option<String>,
}

/// Parses user input and enforces the accepted score range.
pub fn parse_score(input: &str, limits: &ScoreLimits) -> DfResult<i32> {
    let score: i32 = input
        .trim()
        .parse()
        .map_err(|_| DartForgeError::NotANumber(input.to_string()))?;

    if !limits.contains(score) {
        warn!(score, "score outside accepted range");
        return Err(DartForgeError::OutOfRange {
            score,
            min: limits.min_score,
            max: limits.max_score,
        });
    }
    Ok(score)
}

pub fn advise(input: &str, limits: &ScoreLimits) -> DfResult<Advice> {
    let score = parse_score(input, limits)?;
    Ok(build_advice(score))
}

/// Runs the solver and derives everything a front end needs to show it.
pub fn build_advice(score: i32) -> Advice {
    let solutions = solve_score(score);
    debug!(score, options = solutions.len(), "advice computed");

    let regime = if score > MAX_CHECKOUT {
        Regime::Accumulation
    } else {
        Regime::Checkout
    };

    let (heading, guidance) = match regime {
        Regime::Accumulation => (
            format!("Conseil d'accumulation : {}", score),
            vec![
                "Visez T20 (Triple 20) : c'est le segment avec la plus haute valeur (60 points). \
                 Concentrez-vous sur le maximum de points."
                    .to_string(),
                "Objectif : descendre en dessous de 170 pour une finition possible au prochain tour."
                    .to_string(),
            ],
        ),
        Regime::Checkout => (
            format!("Conseil pour finir à : {}", score),
            vec!["Meilleure solution au checkout".to_string()],
        ),
    };

    let options: Vec<AdviceOption> = solutions
        .into_iter()
        .enumerate()
        .map(|(i, seq)| describe_option(score, i + 1, seq))
        .collect();

    let fallback = options.is_empty().then(|| {
        format!(
            "Aucune finition parfaite ou bonne préparation trouvée. Visez le T20 (Score restant : {}) \
             pour réduire le score de manière significative.",
            score - 60
        )
    });

    Advice {
        score,
        regime,
        heading,
        guidance,
        options,
        fallback,
    }
}

fn describe_option(score: i32, index: usize, sequence: ThrowSequence) -> AdviceOption {
    let is_checkout = sequence.is_checkout();
    let darts_thrown = sequence.darts_thrown();
    let remainders = sequence.remainders(score);
    let score_left = remainders.last().copied().unwrap_or(score);

    let steps = sequence
        .darts()
        .iter()
        .zip(remainders)
        .enumerate()
        .map(|(i, (&target, remaining))| {
            let last_thrown = i + 1 == darts_thrown;
            let kind = if target.is_setup_marker() || (!is_checkout && last_thrown) {
                RemainderKind::Left
            } else {
                RemainderKind::Remaining
            };
            DartStep {
                target,
                remaining,
                kind,
            }
        })
        .collect();

    let title = if is_checkout {
        format!("Option {}: Finition parfaite", index)
    } else {
        format!(
            "Option {}: Préparation en laissant {} ({} fléchette{})",
            index,
            score_left,
            darts_thrown,
            if darts_thrown > 1 { "s" } else { "" }
        )
    };

    let note = (!is_checkout && score_left > 1 && score <= MAX_CHECKOUT)
        .then(|| next_visit_note(score_left));

    AdviceOption {
        title,
        is_checkout,
        darts_thrown,
        score_left,
        sequence,
        steps,
        note,
    }
}

/// Whether the leftover can be taken out with a single dart next visit.
fn next_visit_note(left: i32) -> String {
    if left <= MAX_CHECKOUT && !find_checkouts(left).one_dart.is_empty() {
        format!(
            "Le score restant ({}) est idéal pour une finition au prochain tour.",
            left
        )
    } else {
        format!("Le score restant est {}.", left)
    }
}

/// One line of a checkout chart: the top suggestion for a score.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub score: i32,
    pub is_checkout: bool,
    pub options: usize,
    pub best: String,
}

/// Top suggestion for every score in `from..=to`, computed in parallel.
pub fn build_chart(from: i32, to: i32) -> Vec<ChartRow> {
    (from..=to)
        .into_par_iter()
        .map(|score| {
            let solutions = solve_score(score);
            let best = solutions.first();
            ChartRow {
                score,
                is_checkout: best.is_some_and(ThrowSequence::is_checkout),
                options: solutions.len(),
                best: best.map(ThrowSequence::to_string).unwrap_or_default(),
            }
        })
        .collect()
}

pub fn write_chart_csv<P: AsRef<Path>>(path: P, rows: &[ChartRow]) -> DfResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(rows = rows.len(), path = %path.as_ref().display(), "chart exported");
    Ok(())
}
