use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Score = i32;

/// Which neighbour the backtracker steps to when the symbols under the cursor
/// differ and the up/left scores are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Step to `(i - 1, j)` when `up >= left`, consuming a symbol of `s`.
    #[default]
    PreferUp,
    /// Step to `(i, j - 1)` when `left >= up`, consuming a symbol of `t`.
    PreferLeft,
}

/// Scoring parameters of a local alignment.
///
/// The default is pure longest-common-subsequence scoring: a match is worth
/// `1` and neither mismatches nor gaps cost anything.
///
/// ```rust
/// use fuzzy_local_alignment::AlignmentConfig;
///
/// let config = AlignmentConfig::new(3, 10, 10)
///     .penalty(' ', 0)
///     .penalty('・', 0);
/// assert_eq!(config.gap_penalty_of('・'), 0);
/// assert_eq!(config.gap_penalty_of('x'), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    pub(crate) match_score: Score,
    pub(crate) mismatch_penalty: Score,
    pub(crate) gap_penalty: Score,
    /// Per-symbol overrides of `gap_penalty`.
    pub(crate) penalties: BTreeMap<char, Score>,
    pub(crate) tie_break: TieBreak,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_penalty: 0,
            gap_penalty: 0,
            penalties: BTreeMap::new(),
            tie_break: TieBreak::default(),
        }
    }
}

impl AlignmentConfig {
    #[must_use]
    pub fn new(match_score: Score, mismatch_penalty: Score, gap_penalty: Score) -> Self {
        Self {
            match_score,
            mismatch_penalty,
            gap_penalty,
            ..Self::default()
        }
    }

    /// Scoring used by the product catalog fuzzy search: matches are worth 3,
    /// mismatches and gaps cost 10, skipping `の` costs 100 and skipping a
    /// space or `・` is free.
    #[must_use]
    pub fn product_search() -> Self {
        Self::new(3, 10, 10)
            .penalty('の', 100)
            .penalty(' ', 0)
            .penalty('・', 0)
    }

    /// Overrides the gap penalty for a single symbol.
    #[must_use]
    pub fn penalty(mut self, symbol: char, penalty: Score) -> Self {
        self.penalties.insert(symbol, penalty);
        self
    }

    #[must_use]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Cost of skipping `symbol`: its override if one is set, otherwise the
    /// default gap penalty.
    #[inline]
    pub fn gap_penalty_of(&self, symbol: char) -> Score {
        self.penalties
            .get(&symbol)
            .copied()
            .unwrap_or(self.gap_penalty)
    }

    #[inline]
    pub fn match_score(&self) -> Score {
        self.match_score
    }

    #[inline]
    pub fn mismatch_penalty(&self) -> Score {
        self.mismatch_penalty
    }

    #[inline]
    pub fn default_gap_penalty(&self) -> Score {
        self.gap_penalty
    }

    #[inline]
    pub fn penalties(&self) -> &BTreeMap<char, Score> {
        &self.penalties
    }

    #[inline]
    pub fn backtrack_tie_break(&self) -> TieBreak {
        self.tie_break
    }
}
