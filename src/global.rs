//! Needleman–Wunsch global alignment with a linear gap penalty.

use crate::common::Scoring;
use crate::matrix::Matrix;
use crate::trace::{Alignment, Step, Walker};

/// Parameters for global alignment.
///
/// The gap penalty is linear: every gap unit costs `gap`, with no separate
/// opening cost. Degenerate values (a non-negative `gap`) are accepted as
/// given.
#[derive(Clone, Copy, Debug)]
pub struct GlobalParams {
    /// Match/mismatch scoring.
    pub scoring: Scoring,
    /// Per-unit gap penalty (negative in sensible schemes).
    pub gap: i32,
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self { scoring: Scoring::default(), gap: -3 }
    }
}

/// Predecessor recorded for each cell. `Origin` only at (0,0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dir {
    Origin,
    Diag,
    Up,
    Left,
}

/// Align `a` against `b` end-to-end.
///
/// Both sequences are consumed in full: row 0 and column 0 carry pure gap
/// cost from the origin, and the traceback always runs from the bottom-right
/// corner back to (0,0). Ties prefer Diagonal over Up over Left, so the
/// output is deterministic.
pub fn align_global(a: &str, b: &str, params: &GlobalParams) -> Alignment {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = a.len();
    let m = b.len();
    let gap = params.gap;

    let mut score = Matrix::new(n + 1, m + 1, 0i32);
    let mut dir = Matrix::new(n + 1, m + 1, Dir::Origin);
    for i in 1..=n {
        score[(i, 0)] = i as i32 * gap;
        dir[(i, 0)] = Dir::Up;
    }
    for j in 1..=m {
        score[(0, j)] = j as i32 * gap;
        dir[(0, j)] = Dir::Left;
    }

    for i in 1..=n {
        for j in 1..=m {
            let diag = score[(i - 1, j - 1)] + params.scoring.score_pair(a[i - 1], b[j - 1]);
            let up = score[(i - 1, j)] + gap;
            let left = score[(i, j - 1)] + gap;
            let (best, d) = if diag >= up && diag >= left {
                (diag, Dir::Diag)
            } else if up >= left {
                (up, Dir::Up)
            } else {
                (left, Dir::Left)
            };
            score[(i, j)] = best;
            dir[(i, j)] = d;
        }
    }

    let mut walker = Walker::new(&a, &b, n, m);
    while walker.i > 0 || walker.j > 0 {
        match dir[(walker.i, walker.j)] {
            Dir::Diag => walker.step(Step::Diag),
            Dir::Up => walker.step(Step::Up),
            Dir::Left => walker.step(Step::Left),
            Dir::Origin => break,
        }
    }
    walker.finish(score[(n, m)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_alignment_is_fully_diagonal() {
        let p = GlobalParams::default();
        let aln = align_global("ACGTACGT", "ACGTACGT", &p);
        assert_eq!(aln.score, 8 * p.scoring.match_score);
        assert_eq!(aln.aligned_a, "ACGTACGT");
        assert_eq!(aln.aligned_b, "ACGTACGT");
        assert_eq!(aln.midline, "||||||||");
        assert_eq!(aln.cigar, "8M");
    }

    #[test]
    fn gattaca_vs_gcatgcu_scores_minus_five() {
        // Under +1/-2/-3 the textbook pair aligns with no gaps at all:
        // three matches, four mismatches.
        let aln = align_global("GATTACA", "GCATGCU", &GlobalParams::default());
        assert_eq!(aln.score, -5);
        assert_eq!(aln.aligned_a, "GATTACA");
        assert_eq!(aln.aligned_b, "GCATGCU");
        assert_eq!(aln.midline, "|  | | ");
        assert_eq!(aln.cigar, "7M");
    }

    #[test]
    fn score_is_symmetric_in_the_inputs() {
        let p = GlobalParams::default();
        let ab = align_global("GATTACA", "GCATGCU", &p);
        let ba = align_global("GCATGCU", "GATTACA", &p);
        assert_eq!(ab.score, ba.score);
    }

    #[test]
    fn empty_against_nonempty_is_pure_gaps() {
        let p = GlobalParams::default();
        let aln = align_global("", "ACGT", &p);
        assert_eq!(aln.score, 4 * p.gap);
        assert_eq!(aln.aligned_a, "----");
        assert_eq!(aln.aligned_b, "ACGT");
        assert_eq!(aln.midline, "    ");
        assert_eq!(aln.cigar, "4I");
        assert_eq!(aln.range_a, (0, 0));
        assert_eq!(aln.range_b, (0, 4));
    }

    #[test]
    fn both_empty_yields_empty_alignment() {
        let aln = align_global("", "", &GlobalParams::default());
        assert_eq!(aln.score, 0);
        assert!(aln.aligned_a.is_empty());
        assert!(aln.aligned_b.is_empty());
        assert_eq!(aln.columns(), 0);
    }

    #[test]
    fn prefers_diagonal_on_ties() {
        // At (2,1) the diagonal and up candidates are both -2; the pinned
        // priority picks the diagonal, which pushes the gap to the front.
        let aln = align_global("AA", "A", &GlobalParams::default());
        assert_eq!(aln.score, -2);
        assert_eq!(aln.aligned_a, "AA");
        assert_eq!(aln.aligned_b, "-A");
    }

    #[test]
    fn reruns_are_bit_identical() {
        let p = GlobalParams::default();
        let first = align_global("GATTACA", "GCATGCU", &p);
        let second = align_global("GATTACA", "GCATGCU", &p);
        assert_eq!(first, second);
    }
}
