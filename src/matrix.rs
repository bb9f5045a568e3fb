use crate::{AlignmentConfig, Score, Symbol};

/// Dynamic-programming table of a local alignment.
///
/// `get(i, j)` is the best score of a local alignment of `s[..i]` and `t[..j]`
/// ending at that cell. Row `0` and column `0` are zero and no cell is ever
/// negative. The table keeps the first cell (row-major order) holding the
/// global maximum so that [`ScoreMatrix::backtrack`] can start from it.
///
/// One matrix can be filled repeatedly: the storage is reused, nothing else
/// carries over between fills.
#[derive(Debug, Clone, Default)]
pub struct ScoreMatrix {
    cells: Vec<Score>,
    rows: usize,
    cols: usize,
    best: Score,
    best_at: (usize, usize),
    /// Gap penalties of `t`, computed once per fill.
    column_gaps: Vec<Score>,
}

impl ScoreMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and fills a fresh table for `s` against `t`.
    #[must_use]
    pub fn compute<S: Symbol>(s: &[S], t: &[S], config: &AlignmentConfig) -> Self {
        let mut matrix = Self::new();
        matrix.fill(s, t, config);
        matrix
    }

    /// Recomputes the table for `s` against `t`, reusing the allocation.
    pub fn fill<S: Symbol>(&mut self, s: &[S], t: &[S], config: &AlignmentConfig) {
        let rows = s.len() + 1;
        let cols = t.len() + 1;
        self.rows = rows;
        self.cols = cols;
        self.best = 0;
        self.best_at = (0, 0);
        self.cells.clear();
        self.cells.resize(rows * cols, 0);
        self.column_gaps.clear();
        self.column_gaps
            .extend(t.iter().map(|symbol| symbol.gap_penalty(config)));

        for i in 1..rows {
            let s_symbol = &s[i - 1];
            let row_gap = s_symbol.gap_penalty(config);
            let row = i * cols;
            let prev_row = (i - 1) * cols;

            for j in 1..cols {
                let diagonal = if *s_symbol == t[j - 1] {
                    self.cells[prev_row + j - 1].saturating_add(config.match_score)
                } else {
                    self.cells[prev_row + j - 1].saturating_sub(config.mismatch_penalty)
                };
                let up = self.cells[prev_row + j].saturating_sub(row_gap);
                let left = self.cells[row + j - 1].saturating_sub(self.column_gaps[j - 1]);

                let score = diagonal.max(up).max(left).max(0);
                self.cells[row + j] = score;

                if score > self.best {
                    self.best = score;
                    self.best_at = (i, j);
                }
            }
        }

        trace!(
            "filled {}x{} score matrix, best {} at {:?}",
            rows, cols, self.best, self.best_at
        );
    }

    /// Score of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Score {
        self.cells[i * self.cols + j]
    }

    /// `s.len() + 1` of the last fill.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `t.len() + 1` of the last fill.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn best_score(&self) -> Score {
        self.best
    }

    /// Coordinates of the first cell holding [`best_score`](Self::best_score),
    /// `(0, 0)` when every cell is zero.
    #[inline]
    pub fn best_position(&self) -> (usize, usize) {
        self.best_at
    }

    /// Row-major view over all cells, headers included.
    pub fn cells(&self) -> impl Iterator<Item = Score> + '_ {
        self.cells.iter().copied()
    }
}
