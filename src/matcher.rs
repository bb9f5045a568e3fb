use crate::symbol::{graphemes, scalars};
use crate::{AlignmentConfig, FuzzyMatcher, MatchMode, Query, ScoreMatrix, Segmentation, Symbol};

/// Fuzzy match decisions over a record's fields.
///
/// Fields are handed in priority order; the first accepted field decides.
/// Nothing is cached between calls, a matcher can be shared freely.
impl FuzzyMatcher {
    #[inline]
    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    #[inline]
    pub fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    /// Whether any of `fields` is accepted for `query`.
    pub fn is_match<'a>(&self, fields: impl IntoIterator<Item = &'a str>, query: &Query) -> bool {
        self.first_match(fields, query).is_some()
    }

    /// Whether a single field is accepted for `query`.
    pub fn field_matches(&self, field: &str, query: &Query) -> bool {
        self.first_match([field], query).is_some()
    }

    /// Position (in iteration order) of the first accepted field.
    pub fn first_match<'a>(
        &self,
        fields: impl IntoIterator<Item = &'a str>,
        query: &Query,
    ) -> Option<usize> {
        let mut scratch = ScoreMatrix::new();
        let found = match self.segmentation {
            Segmentation::Scalars => fields.into_iter().position(|field| {
                self.accepts(&mut scratch, &self.capped(scalars(field)), query, scalars)
            }),
            Segmentation::Graphemes => fields.into_iter().position(|field| {
                self.accepts(&mut scratch, &self.capped(graphemes(field)), query, graphemes)
            }),
        };
        debug!("query {query:?}: first accepted field {found:?}");
        found
    }

    fn capped<S>(&self, mut symbols: Vec<S>) -> Vec<S> {
        if let Some(cap) = self.max_field_symbols {
            symbols.truncate(cap);
        }
        symbols
    }

    fn accepts<'q, S: Symbol>(
        &self,
        scratch: &mut ScoreMatrix,
        field: &[S],
        query: &'q Query,
        split: impl Fn(&'q str) -> Vec<S>,
    ) -> bool {
        match self.mode {
            MatchMode::AllTokensPerField => query
                .tokens
                .iter()
                .all(|token| self.passes(scratch, field, &split(token.as_str()))),
            MatchMode::WholeQuery => self.passes(scratch, field, &split(query.text.as_str())),
        }
    }

    /// `aligned / unit >= threshold`, an empty unit always passes.
    fn passes<S: Symbol>(&self, scratch: &mut ScoreMatrix, field: &[S], unit: &[S]) -> bool {
        if unit.is_empty() {
            return true;
        }
        scratch.fill(field, unit, &self.config);
        let alignment = scratch.backtrack(field, unit, self.config.tie_break);
        let ratio = alignment.ratio(unit.len());
        trace!(
            "aligned {:?}: {}/{} = {ratio:.3} (threshold {})",
            alignment.text,
            alignment.len,
            unit.len(),
            self.threshold
        );
        ratio >= self.threshold
    }
}
