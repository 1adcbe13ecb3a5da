use super::catalog::{FINISH_VALUES, THROW_VALUES};
use super::types::{SolutionSet, ThrowSequence};
use crate::notation::Target;

/// Highest score a three-dart checkout can reach (T20, T20, D-BULL).
pub const MAX_CHECKOUT: i32 = 170;

/// Above this score the search widens from two darts to three.
pub const TWO_DART_CEILING: i32 = 100;

/// Dart budget for the search. Not a rule of the game: two darts cannot
/// take out more than 100 anyway, so three-dart paths are only explored
/// above that.
pub fn dart_budget(score: i32) -> usize {
    if score <= TWO_DART_CEILING {
        2
    } else {
        3
    }
}

/// Enumerates every 1-, 2- and 3-dart checkout for `score`, bucketed by
/// the class of the first dart. Duplicates are kept.
///
/// Any intermediate remainder of 1 or less prunes the branch.
pub fn find_checkouts(score: i32) -> SolutionSet {
    let mut solutions = SolutionSet::default();

    for &d in FINISH_VALUES.iter() {
        if d == score {
            solutions.add_one_dart(finishing_sequence(&[], d));
        }
    }

    let budget = dart_budget(score);

    for &shoot1 in THROW_VALUES.iter() {
        let remain1 = score - shoot1;
        if remain1 <= 1 {
            continue;
        }

        for &d in FINISH_VALUES.iter() {
            if d == remain1 {
                solutions.add(finishing_sequence(&[shoot1], d));
            }
        }

        if budget < 3 {
            continue;
        }

        for &shoot2 in THROW_VALUES.iter() {
            let remain2 = remain1 - shoot2;
            if remain2 <= 1 {
                continue;
            }
            for &d in FINISH_VALUES.iter() {
                if d == remain2 {
                    solutions.add(finishing_sequence(&[shoot1, shoot2], d));
                }
            }
        }
    }

    solutions
}

fn finishing_sequence(setup: &[i32], finish: i32) -> ThrowSequence {
    setup
        .iter()
        .filter_map(|&v| Target::from_value(v))
        .chain(Target::finish(finish))
        .collect::<Vec<_>>()
        .into()
}
