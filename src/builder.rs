use crate::{AlignmentConfig, Error, FuzzyMatcher, MatchMode, Result, Segmentation};

/// Threshold used when none is given: 60% of a token has to align.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Builder for [`FuzzyMatcher`].
///
/// ```rust
/// use fuzzy_local_alignment::{AlignmentConfig, FuzzyMatcherBuilder, Query};
///
/// let matcher = FuzzyMatcherBuilder::new()
///     .config(AlignmentConfig::product_search())
///     .threshold(0.6)
///     .build()
///     .unwrap();
///
/// let query = Query::new("ステンレス ボルト");
/// assert!(matcher.is_match(["ステンレス製ボルト M6"], &query));
/// assert!(!matcher.is_match(["アルミ ナット"], &query));
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyMatcherBuilder {
    config: AlignmentConfig,
    threshold: f64,
    mode: MatchMode,
    segmentation: Segmentation,
    max_field_symbols: Option<usize>,
}

impl Default for FuzzyMatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcherBuilder {
    /// Starts from LCS scoring, the default threshold and all-tokens mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: AlignmentConfig::default(),
            threshold: DEFAULT_THRESHOLD,
            mode: MatchMode::default(),
            segmentation: Segmentation::default(),
            max_field_symbols: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: AlignmentConfig) -> Self {
        self.config = config;
        self
    }

    /// Minimum `aligned / token` length ratio, inclusive. Must lie in `(0, 1]`.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = segmentation;
        self
    }

    /// Aligns only the first `cap` symbols of each field. Bounds the
    /// `|field| * |token|` cost of a single comparison.
    #[must_use]
    pub fn max_field_symbols(mut self, cap: usize) -> Self {
        self.max_field_symbols = Some(cap);
        self
    }

    pub fn build(self) -> Result<FuzzyMatcher> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        Ok(FuzzyMatcher {
            config: self.config,
            threshold: self.threshold,
            mode: self.mode,
            segmentation: self.segmentation,
            max_field_symbols: self.max_field_symbols,
        })
    }
}
