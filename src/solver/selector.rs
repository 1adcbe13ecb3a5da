use super::enumerator::{find_checkouts, MAX_CHECKOUT};
use super::types::{Bucket, SolutionSet, ThrowSequence};
use crate::notation::Target;
use tracing::debug;

pub const MIN_CHECKOUT: i32 = 2;
pub const MAX_CHECKOUT_OPTIONS: usize = 5;
pub const MAX_SETUP_OPTIONS: usize = 4;
pub const MAX_ACCUMULATION_OPTIONS: usize = 3;

/// Below this, an unreachable score gets no setup advice at all.
pub const SETUP_FLOOR: i32 = 60;

/// Ranked advice for `score`: checkouts when one exists, setup throws
/// otherwise. Total over `i32`; non-positive scores give nothing.
pub fn solve_score(score: i32) -> Vec<ThrowSequence> {
    if (MIN_CHECKOUT..=MAX_CHECKOUT).contains(&score) {
        let options = find_checkouts(score);
        debug!(
            score,
            one_dart = options.one_dart.len(),
            treble_first = options.treble_first.len(),
            double_first = options.double_first.len(),
            single_first = options.single_first.len(),
            "checkout search"
        );

        let picked = select_checkouts(&options);
        if !picked.is_empty() {
            return picked;
        }
        debug!(score, "no checkout, falling back to setup");
    }

    setup_templates(score)
}

/// One-dart finishes first, then one representative per opening class.
pub fn select_checkouts(options: &SolutionSet) -> Vec<ThrowSequence> {
    let mut picked: Vec<ThrowSequence> = options.one_dart.clone();

    if let Some(first) = options.treble_first.first() {
        picked.push(first.clone());
    }

    for bucket in [Bucket::DoubleFirst, Bucket::SingleFirst] {
        let candidates = options.bucket(bucket);
        let Some(fallback) = candidates.first() else {
            continue;
        };
        let choice = candidates
            .iter()
            .find(|seq| !picked.contains(seq))
            .unwrap_or(fallback);
        picked.push(choice.clone());
    }

    let mut unique = dedup_sequences(picked);
    unique.truncate(MAX_CHECKOUT_OPTIONS);
    unique
}

/// Scoring templates for scores that cannot be finished this visit.
pub fn setup_templates(score: i32) -> Vec<ThrowSequence> {
    if score > MAX_CHECKOUT {
        let mut templates = vec![
            ThrowSequence::new(vec![Target::Treble(20); 3]),
            ThrowSequence::new(vec![
                Target::Treble(20),
                Target::Treble(20),
                Target::Setup(score - 120),
            ]),
            ThrowSequence::new(vec![Target::Treble(19); 3]),
        ];
        templates.truncate(MAX_ACCUMULATION_OPTIONS);
        return templates;
    }

    if score > SETUP_FLOOR {
        let mut templates = vec![
            ThrowSequence::new(vec![Target::Treble(20), Target::Setup(score - 60)]),
            ThrowSequence::new(vec![Target::Treble(19), Target::Setup(score - 57)]),
        ];
        templates.truncate(MAX_SETUP_OPTIONS);
        return templates;
    }

    Vec::new()
}

/// Structural de-duplication, first occurrence wins.
fn dedup_sequences(seqs: Vec<ThrowSequence>) -> Vec<ThrowSequence> {
    let mut out: Vec<ThrowSequence> = Vec::with_capacity(seqs.len());
    for seq in seqs {
        if !out.contains(&seq) {
            out.push(seq);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(labels: &[&str]) -> ThrowSequence {
        ThrowSequence::new(labels.iter().map(|l| l.parse().unwrap()).collect())
    }

    #[test]
    fn double_pick_skips_sequences_already_chosen() {
        let options = SolutionSet {
            one_dart: vec![seq(&["D20"])],
            treble_first: vec![],
            double_first: vec![seq(&["D20"]), seq(&["D10", "D10"])],
            single_first: vec![],
        };
        let picked = select_checkouts(&options);
        assert_eq!(picked, vec![seq(&["D20"]), seq(&["D10", "D10"])]);
    }

    #[test]
    fn falls_back_to_first_when_all_taken_then_dedups() {
        let options = SolutionSet {
            one_dart: vec![],
            treble_first: vec![seq(&["T20", "D20"])],
            double_first: vec![],
            single_first: vec![seq(&["T20", "D20"])],
        };
        assert_eq!(select_checkouts(&options), vec![seq(&["T20", "D20"])]);
    }

    #[test]
    fn empty_set_selects_nothing() {
        assert!(select_checkouts(&SolutionSet::default()).is_empty());
    }

    #[test]
    fn small_unreachable_scores_get_no_setup() {
        assert!(setup_templates(60).is_empty());
        assert!(setup_templates(1).is_empty());
        assert_eq!(setup_templates(61).len(), 2);
    }
}
