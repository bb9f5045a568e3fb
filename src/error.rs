use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("threshold must lie in (0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("search exceeded its {budget:?} budget after {evaluated} records")]
    BudgetExceeded { budget: Duration, evaluated: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
