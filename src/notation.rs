use crate::error::DartForgeError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter};

/// Label prefix of a setup marker ("aim to leave N").
pub const SETUP_PREFIX: &str = "À viser";

pub const SINGLE_BULL: i32 = 25;
pub const DOUBLE_BULL: i32 = 50;

/// Highest single-dart value (treble 20).
pub const MAX_TREBLE: i32 = 60;
/// Highest numbered double (double 20).
pub const MAX_DOUBLE: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum NotationClass {
    Treble,
    Double,
    Single,
    DoubleBull,
    SingleBull,
    SetupMarker,
}

/// One entry of a throw sequence.
///
/// Faces are kept as plain numbers: the value codec renders any
/// non-treble, non-double value as a single, so `Single(61)` is a valid
/// rendering even though no such wedge exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Treble(u32),
    Double(u32),
    Single(u32),
    SingleBull,
    DoubleBull,
    /// Not a dart: the residual score the player should aim to leave.
    Setup(i32),
}

impl Target {
    /// Value to target, with fixed precedence: bulls, then treble, then
    /// double, then single. Overlapping values (6, 12, ...) always render
    /// as trebles.
    pub fn from_value(value: i32) -> Option<Self> {
        if value <= 0 {
            return None;
        }
        let target = match value {
            DOUBLE_BULL => Self::DoubleBull,
            SINGLE_BULL => Self::SingleBull,
            v if v % 3 == 0 && v <= MAX_TREBLE => Self::Treble((v / 3) as u32),
            v if v % 2 == 0 && v <= MAX_DOUBLE => Self::Double((v / 2) as u32),
            v => Self::Single(v as u32),
        };
        Some(target)
    }

    /// Renders a finishing value as the double that scores it.
    pub fn finish(value: i32) -> Option<Self> {
        match value {
            DOUBLE_BULL => Some(Self::DoubleBull),
            v if v > 0 && v % 2 == 0 && v <= MAX_DOUBLE => Some(Self::Double((v / 2) as u32)),
            _ => None,
        }
    }

    pub fn value(&self) -> i32 {
        match *self {
            Self::Treble(face) => face as i32 * 3,
            Self::Double(face) => face as i32 * 2,
            Self::Single(face) => face as i32,
            Self::SingleBull => SINGLE_BULL,
            Self::DoubleBull => DOUBLE_BULL,
            Self::Setup(_) => 0,
        }
    }

    pub fn class(&self) -> NotationClass {
        match self {
            Self::Treble(_) => NotationClass::Treble,
            Self::Double(_) => NotationClass::Double,
            Self::Single(_) => NotationClass::Single,
            Self::SingleBull => NotationClass::SingleBull,
            Self::DoubleBull => NotationClass::DoubleBull,
            Self::Setup(_) => NotationClass::SetupMarker,
        }
    }

    /// True for targets that legally end a leg.
    pub fn is_finishing(&self) -> bool {
        matches!(self, Self::Double(_) | Self::DoubleBull)
    }

    pub fn is_setup_marker(&self) -> bool {
        matches!(self, Self::Setup(_))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Treble(face) => write!(f, "T{}", face),
            Self::Double(face) => write!(f, "D{}", face),
            Self::Single(face) => write!(f, "S{}", face),
            Self::SingleBull => write!(f, "S-BULL ({})", SINGLE_BULL),
            Self::DoubleBull => write!(f, "D-BULL ({})", DOUBLE_BULL),
            Self::Setup(left) => write!(f, "{} {}", SETUP_PREFIX, left),
        }
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Target {
    type Err = DartForgeError;

    /// Strict parse: only the exact rendered forms and legal faces 1..=20.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || DartForgeError::InvalidNotation(s.to_string());

        if let Some(rest) = token.strip_prefix(SETUP_PREFIX) {
            return rest.trim().parse().map(Self::Setup).map_err(|_| invalid());
        }
        if token.starts_with("D-BULL") {
            return Ok(Self::DoubleBull);
        }
        if token.starts_with("S-BULL") {
            return Ok(Self::SingleBull);
        }

        let mut chars = token.chars();
        let class = chars.next().ok_or_else(invalid)?;
        let face: u32 = chars.as_str().parse().map_err(|_| invalid())?;
        if !(1..=20).contains(&face) {
            return Err(invalid());
        }
        match class.to_ascii_uppercase() {
            'T' => Ok(Self::Treble(face)),
            'D' => Ok(Self::Double(face)),
            'S' => Ok(Self::Single(face)),
            _ => Err(invalid()),
        }
    }
}

/// Renders a value as notation text. Values <= 0 give an empty string.
pub fn notation_from_value(value: i32) -> String {
    Target::from_value(value)
        .map(|t| t.to_string())
        .unwrap_or_default()
}

/// Lenient inverse of [`notation_from_value`]. Setup markers and anything
/// without a recognisable class letter followed by digits yield 0.
pub fn value_from_notation(notation: &str) -> i32 {
    if notation.starts_with(SETUP_PREFIX) {
        return 0;
    }
    if notation.contains("D-BULL") {
        return DOUBLE_BULL;
    }
    if notation.contains("S-BULL") {
        return SINGLE_BULL;
    }

    match scan_class_face(notation) {
        Some(('T', face)) => face.saturating_mul(3),
        Some(('D', face)) => face.saturating_mul(2),
        Some((_, face)) => face,
        None => 0,
    }
}

// First `[TDS]<digits>` occurrence anywhere in the string.
fn scan_class_face(notation: &str) -> Option<(char, i32)> {
    let bytes = notation.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if !matches!(b, b'T' | b'D' | b'S') {
            continue;
        }
        let digits: &str = {
            let rest = &notation[i + 1..];
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            &rest[..end]
        };
        if digits.is_empty() {
            continue;
        }
        return digits.parse().ok().map(|face| (b as char, face));
    }
    None
}
