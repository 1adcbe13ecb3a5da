//! Fixed score tables. Iteration order decides which sequence the
//! selector surfaces for each bucket, so the order here is part of the
//! contract.

pub const THROW_COUNT: usize = 41;
pub const FINISH_COUNT: usize = 21;

/// Values reachable with one dart: trebles 60..=3, singles 20..=1, then
/// the single bull.
pub static THROW_VALUES: [i32; THROW_COUNT] = build_throw_values();

/// Values that legally end a leg: double bull, then doubles 40..=2.
pub static FINISH_VALUES: [i32; FINISH_COUNT] = build_finish_values();

const fn build_throw_values() -> [i32; THROW_COUNT] {
    let mut out = [0; THROW_COUNT];
    let mut i = 0;
    while i < 20 {
        let face = 20 - i as i32;
        out[i] = face * 3;
        out[20 + i] = face;
        i += 1;
    }
    out[40] = 25;
    out
}

const fn build_finish_values() -> [i32; FINISH_COUNT] {
    let mut out = [0; FINISH_COUNT];
    out[0] = 50;
    let mut i = 0;
    while i < 20 {
        out[1 + i] = (20 - i as i32) * 2;
        i += 1;
    }
    out
}

pub fn is_finish_value(value: i32) -> bool {
    FINISH_VALUES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throw_values_are_ordered_trebles_singles_bull() {
        assert_eq!(&THROW_VALUES[..3], &[60, 57, 54]);
        assert_eq!(THROW_VALUES[19], 3);
        assert_eq!(THROW_VALUES[20], 20);
        assert_eq!(THROW_VALUES[39], 1);
        assert_eq!(THROW_VALUES[40], 25);
    }

    #[test]
    fn finish_values_start_with_bull() {
        assert_eq!(FINISH_VALUES[0], 50);
        assert_eq!(FINISH_VALUES[1], 40);
        assert_eq!(FINISH_VALUES[20], 2);
        assert!(FINISH_VALUES.iter().skip(1).all(|v| v % 2 == 0));
    }

    #[test]
    fn finish_lookup() {
        assert!(is_finish_value(50));
        assert!(is_finish_value(2));
        assert!(!is_finish_value(25));
        assert!(!is_finish_value(42));
    }
}
