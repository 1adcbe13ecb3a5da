use crate::notation::{NotationClass, Target};
use serde::Serialize;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Darts thrown in order. Checkout sequences sum to the score they solve
/// and end on a double; setup sequences may end on a [`Target::Setup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ThrowSequence(pub Vec<Target>);

impl ThrowSequence {
    pub fn new(darts: Vec<Target>) -> Self {
        Self(darts)
    }

    pub fn darts(&self) -> &[Target] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Target> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Target> {
        self.0.last()
    }

    /// Sum of the thrown darts. Setup markers count as 0.
    pub fn total(&self) -> i32 {
        self.0.iter().map(Target::value).sum()
    }

    /// A sequence finishes the leg iff its last entry is a double.
    pub fn is_checkout(&self) -> bool {
        self.last().is_some_and(Target::is_finishing)
    }

    /// Number of real darts, setup markers excluded.
    pub fn darts_thrown(&self) -> usize {
        self.0.iter().filter(|t| !t.is_setup_marker()).count()
    }

    /// Score left after each entry, starting from `score`.
    pub fn remainders(&self, score: i32) -> Vec<i32> {
        self.0
            .iter()
            .scan(score, |left, t| {
                *left -= t.value();
                Some(*left)
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|t| t.to_string()).collect()
    }
}

impl fmt::Display for ThrowSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

impl From<Vec<Target>> for ThrowSequence {
    fn from(darts: Vec<Target>) -> Self {
        Self(darts)
    }
}

/// Solution buckets, keyed by the class of the first dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Bucket {
    OneDart,
    TrebleFirst,
    DoubleFirst,
    SingleFirst,
}

impl Bucket {
    /// Bucket for a multi-dart sequence opening with `class`.
    /// Bulls fold into their multiplier's bucket.
    pub fn for_opening(class: NotationClass) -> Option<Self> {
        match class {
            NotationClass::Treble => Some(Self::TrebleFirst),
            NotationClass::Double | NotationClass::DoubleBull => Some(Self::DoubleFirst),
            NotationClass::Single | NotationClass::SingleBull => Some(Self::SingleFirst),
            NotationClass::SetupMarker => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSet {
    pub one_dart: Vec<ThrowSequence>,
    pub treble_first: Vec<ThrowSequence>,
    pub double_first: Vec<ThrowSequence>,
    pub single_first: Vec<ThrowSequence>,
}

impl SolutionSet {
    pub fn bucket(&self, bucket: Bucket) -> &[ThrowSequence] {
        match bucket {
            Bucket::OneDart => &self.one_dart,
            Bucket::TrebleFirst => &self.treble_first,
            Bucket::DoubleFirst => &self.double_first,
            Bucket::SingleFirst => &self.single_first,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<ThrowSequence> {
        match bucket {
            Bucket::OneDart => &mut self.one_dart,
            Bucket::TrebleFirst => &mut self.treble_first,
            Bucket::DoubleFirst => &mut self.double_first,
            Bucket::SingleFirst => &mut self.single_first,
        }
    }

    /// Files a multi-dart sequence under its opening dart. Empty sequences
    /// and marker-led sequences are dropped.
    pub fn add(&mut self, seq: ThrowSequence) {
        let Some(bucket) = seq.first().and_then(|t| Bucket::for_opening(t.class())) else {
            return;
        };
        self.bucket_mut(bucket).push(seq);
    }

    pub fn add_one_dart(&mut self, seq: ThrowSequence) {
        self.one_dart.push(seq);
    }

    pub fn len(&self) -> usize {
        self.one_dart.len() + self.treble_first.len() + self.double_first.len() + self.single_first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
