use crate::{AlignmentConfig, Score};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The atomic unit compared during alignment.
///
/// Comparison is exact equality: no case folding or normalization happens
/// here, callers normalize upstream.
pub trait Symbol: PartialEq {
    /// Cost of leaving this symbol out of the alignment path.
    fn gap_penalty(&self, config: &AlignmentConfig) -> Score;

    fn push_onto(&self, out: &mut String);
}

impl Symbol for char {
    #[inline]
    fn gap_penalty(&self, config: &AlignmentConfig) -> Score {
        config.gap_penalty_of(*self)
    }

    #[inline]
    fn push_onto(&self, out: &mut String) {
        out.push(*self);
    }
}

/// Grapheme clusters made of a single scalar share that scalar's override;
/// longer clusters always cost the default gap penalty.
impl Symbol for &str {
    #[inline]
    fn gap_penalty(&self, config: &AlignmentConfig) -> Score {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.gap_penalty_of(c),
            _ => config.default_gap_penalty(),
        }
    }

    #[inline]
    fn push_onto(&self, out: &mut String) {
        out.push_str(self);
    }
}

/// How text is cut into symbols before alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segmentation {
    /// One symbol per Unicode scalar value.
    #[default]
    Scalars,
    /// One symbol per extended grapheme cluster, so that e.g. a base letter
    /// and its combining mark are compared as a unit.
    Graphemes,
}

impl Segmentation {
    /// Number of symbols `text` is made of under this segmentation.
    pub fn count(self, text: &str) -> usize {
        match self {
            Segmentation::Scalars => text.chars().count(),
            Segmentation::Graphemes => text.graphemes(true).count(),
        }
    }
}

#[inline]
pub(crate) fn scalars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[inline]
pub(crate) fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}
