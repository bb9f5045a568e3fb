//! Fuzzy matching of short query tokens against record fields by local
//! alignment.
//!
//! A query token is aligned against a field with a Smith-Waterman style
//! dynamic program ([`ScoreMatrix`]); the matched symbols on the best path are
//! recovered by [`ScoreMatrix::backtrack`] and a field is accepted when the
//! aligned length covers enough of the token ([`FuzzyMatcher`]). This tolerates
//! typos, missing separators and punctuation noise that defeat plain
//! substring search.
//!
//! ```rust
//! use fuzzy_local_alignment::local_alignment;
//!
//! assert_eq!(local_alignment("Product-A100", "ProductA100", None), "ProductA100");
//! ```
#[macro_use]
extern crate log;

mod backtrack;
mod builder;
mod catalog;
mod config;
mod error;
mod matcher;
mod matrix;
pub mod normalize;
mod structs;
mod symbol;

pub use builder::{DEFAULT_THRESHOLD, FuzzyMatcherBuilder};
pub use catalog::{Catalog, Field, Product, SearchMode};
pub use config::{AlignmentConfig, Score, TieBreak};
pub use error::{Error, Result};
pub use matrix::ScoreMatrix;
pub use structs::*;
pub use symbol::{Segmentation, Symbol};

/// Best local alignment of `s` against `t`, as the string of matched scalar
/// values in left-to-right order.
///
/// Without a config, plain longest-common-subsequence scoring is used.
pub fn local_alignment(s: &str, t: &str, config: Option<&AlignmentConfig>) -> String {
    align(s, t, config).text
}

/// Like [`local_alignment`] but keeps the score and spans.
pub fn align(s: &str, t: &str, config: Option<&AlignmentConfig>) -> Alignment {
    let default;
    let config = match config {
        Some(config) => config,
        None => {
            default = AlignmentConfig::default();
            &default
        }
    };
    let s = symbol::scalars(s);
    let t = symbol::scalars(t);
    ScoreMatrix::compute(&s, &t, config).backtrack(&s, &t, config.tie_break)
}

/// Share of `token` (in scalar values) that aligns against `field`; `1.0`
/// for an empty token.
pub fn alignment_ratio(field: &str, token: &str, config: Option<&AlignmentConfig>) -> f64 {
    align(field, token, config).ratio(token.chars().count())
}
