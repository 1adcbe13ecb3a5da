pub mod catalog;
pub mod enumerator;
pub mod selector;
pub mod types;

pub use self::enumerator::{find_checkouts, MAX_CHECKOUT};
pub use self::selector::solve_score;
pub use self::types::{Bucket, SolutionSet, ThrowSequence};
