use crate::{Alignment, ScoreMatrix, Symbol, TieBreak};

impl ScoreMatrix {
    /// Walks back from the global maximum and collects the symbols that
    /// matched along the way.
    ///
    /// `s` and `t` must be the sequences the matrix was last filled with.
    /// The walk stops on the first row, the first column or a zero cell.
    /// Mismatched and skipped symbols are dropped, so the result is a
    /// (weighted) common subsequence of both inputs rather than a substring.
    pub fn backtrack<S: Symbol>(&self, s: &[S], t: &[S], tie_break: TieBreak) -> Alignment {
        debug_assert_eq!(self.rows(), s.len() + 1);
        debug_assert_eq!(self.cols(), t.len() + 1);

        let (mut i, mut j) = self.best_position();
        let mut matched: Vec<&S> = Vec::with_capacity(i.min(j));

        while i > 0 && j > 0 && self.get(i, j) != 0 {
            if s[i - 1] == t[j - 1] {
                matched.push(&s[i - 1]);
                i -= 1;
                j -= 1;
                continue;
            }
            let up = self.get(i - 1, j);
            let left = self.get(i, j - 1);
            let step_up = match tie_break {
                TieBreak::PreferUp => up >= left,
                TieBreak::PreferLeft => up > left,
            };
            if step_up {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        let mut text = String::new();
        for symbol in matched.iter().rev() {
            symbol.push_onto(&mut text);
        }

        Alignment {
            text,
            len: matched.len(),
            score: self.best_score(),
            s_range: i..self.best_position().0,
            t_range: j..self.best_position().1,
        }
    }
}
