use crate::{AlignmentConfig, Score, Segmentation};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Result of [`ScoreMatrix::backtrack`](crate::ScoreMatrix::backtrack).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    /// Matched symbols, left to right.
    pub text: String,
    /// Number of matched symbols.
    pub len: usize,
    /// Score of the cell the walk started from.
    pub score: Score,
    /// Symbols of `s` spanned by the path (not all of them matched).
    pub s_range: Range<usize>,
    /// Symbols of `t` spanned by the path.
    pub t_range: Range<usize>,
}

impl Alignment {
    /// `len / of` with an empty `of` counting as a full match.
    #[inline]
    pub fn ratio(&self, of: usize) -> f64 {
        if of == 0 {
            1.0
        } else {
            self.len as f64 / of as f64
        }
    }
}

/// How a query is held against a record's fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// A field is accepted when every token of the query aligns against it
    /// well enough.
    #[default]
    AllTokensPerField,
    /// A field is accepted when the query as a whole aligns against it well
    /// enough.
    WholeQuery,
}

/// A whitespace-tokenized query.
///
/// Runs of whitespace collapse into one separator and duplicate tokens are
/// dropped, first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub(crate) text: String,
    pub(crate) tokens: Vec<String>,
}

impl Query {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.split_whitespace().join(" "),
            tokens: text
                .split_whitespace()
                .unique()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// The query with its whitespace collapsed.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<&String> for Query {
    fn from(text: &String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ratio-threshold fuzzy matcher, built with
/// [`FuzzyMatcherBuilder`](crate::FuzzyMatcherBuilder).
#[derive(Clone, PartialEq)]
pub struct FuzzyMatcher {
    pub(crate) config: AlignmentConfig,
    pub(crate) threshold: f64,
    pub(crate) mode: MatchMode,
    pub(crate) segmentation: Segmentation,
    pub(crate) max_field_symbols: Option<usize>,
}

impl fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = &mut f.debug_struct("FuzzyMatcher");
        s = s
            .field("threshold", &self.threshold)
            .field("mode", &self.mode);
        if self.segmentation != Segmentation::Scalars {
            s = s.field("segmentation", &self.segmentation);
        }
        if let Some(cap) = self.max_field_symbols {
            s = s.field("max_field_symbols", &cap);
        }
        s.field("config", &self.config).finish()
    }
}
