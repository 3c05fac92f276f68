//! Smith–Waterman–Gotoh local alignment with affine gaps.
//!
//! Three score matrices are filled in lockstep: `H` (best alignment ending
//! at a cell with a match/mismatch, floored at zero), `E` (ending with a gap
//! run in sequence 1, consuming sequence 2) and `F` (ending with a gap run
//! in sequence 2, consuming sequence 1). Each carries its own pointer table;
//! the traceback starts from the best cell seen anywhere in the three
//! matrices and stops at the local-restart boundary, an `H` cell holding
//! zero.

use crate::common::Scoring;
use crate::matrix::Matrix;
use crate::trace::{Alignment, Step, Walker};

// Large enough to never win a max, small enough to survive further
// subtraction without wrapping.
const NEG_INF: i32 = i32::MIN / 4;

/// Parameters for local alignment.
///
/// Gap penalties are affine: the first unit of a run costs
/// `gap_open + gap_extend`, each further unit `gap_extend`. Degenerate
/// values (non-negative penalties) are accepted as given.
#[derive(Clone, Copy, Debug)]
pub struct LocalParams {
    /// Match/mismatch scoring.
    pub scoring: Scoring,
    /// Gap opening penalty (negative in sensible schemes).
    pub gap_open: i32,
    /// Gap extension penalty (negative in sensible schemes).
    pub gap_extend: i32,
}

impl Default for LocalParams {
    fn default() -> Self {
        Self { scoring: Scoring::default(), gap_open: -5, gap_extend: -1 }
    }
}

/// Which matrix a traceback pointer refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layer {
    H,
    E,
    F,
}

/// A recorded predecessor: source matrix and cell.
#[derive(Clone, Copy, Debug)]
struct Pred {
    layer: Layer,
    i: usize,
    j: usize,
}

/// Align the best-scoring contiguous subsequence pair of `a` and `b`.
///
/// Row and column 0 of `H` stay at zero; a local alignment may start
/// anywhere. Pointer ties are fixed: `H` prefers Diagonal over an E source
/// over an F source; `E` and `F` prefer opening a fresh gap from `H` over
/// extending. The traceback origin is the first maximum encountered in
/// row-major order, `H` scanned before `E` before `F` at each cell.
pub fn align_local(a: &str, b: &str, params: &LocalParams) -> Alignment {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = a.len();
    let m = b.len();
    let open = params.gap_open + params.gap_extend;
    let extend = params.gap_extend;

    let mut h = Matrix::new(n + 1, m + 1, 0i32);
    let mut e = Matrix::new(n + 1, m + 1, NEG_INF);
    let mut f = Matrix::new(n + 1, m + 1, NEG_INF);
    let mut hp: Matrix<Option<Pred>> = Matrix::new(n + 1, m + 1, None);
    let mut ep: Matrix<Option<Pred>> = Matrix::new(n + 1, m + 1, None);
    let mut fp: Matrix<Option<Pred>> = Matrix::new(n + 1, m + 1, None);

    let mut best = 0i32;
    let mut best_i = 0usize;
    let mut best_j = 0usize;
    let mut best_layer = Layer::H;

    for i in 1..=n {
        for j in 1..=m {
            let e_open = h[(i, j - 1)] + open;
            let e_extend = e[(i, j - 1)] + extend;
            if e_open >= e_extend {
                e[(i, j)] = e_open;
                ep[(i, j)] = Some(Pred { layer: Layer::H, i, j: j - 1 });
            } else {
                e[(i, j)] = e_extend;
                ep[(i, j)] = Some(Pred { layer: Layer::E, i, j: j - 1 });
            }

            let f_open = h[(i - 1, j)] + open;
            let f_extend = f[(i - 1, j)] + extend;
            if f_open >= f_extend {
                f[(i, j)] = f_open;
                fp[(i, j)] = Some(Pred { layer: Layer::H, i: i - 1, j });
            } else {
                f[(i, j)] = f_extend;
                fp[(i, j)] = Some(Pred { layer: Layer::F, i: i - 1, j });
            }

            let diag = h[(i - 1, j - 1)] + params.scoring.score_pair(a[i - 1], b[j - 1]);
            let val = 0.max(diag).max(e[(i, j)]).max(f[(i, j)]);
            h[(i, j)] = val;
            hp[(i, j)] = if val == 0 {
                // local-restart boundary
                None
            } else if val == diag {
                Some(Pred { layer: Layer::H, i: i - 1, j: j - 1 })
            } else if val == e[(i, j)] {
                Some(Pred { layer: Layer::E, i, j })
            } else {
                Some(Pred { layer: Layer::F, i, j })
            };

            // Strictly-greater updates keep the first maximum in row-major
            // order, H before E before F.
            if h[(i, j)] > best {
                best = h[(i, j)];
                best_i = i;
                best_j = j;
                best_layer = Layer::H;
            }
            if e[(i, j)] > best {
                best = e[(i, j)];
                best_i = i;
                best_j = j;
                best_layer = Layer::E;
            }
            if f[(i, j)] > best {
                best = f[(i, j)];
                best_i = i;
                best_j = j;
                best_layer = Layer::F;
            }
        }
    }

    let mut walker = Walker::new(&a, &b, best_i, best_j);
    let mut layer = best_layer;
    loop {
        match layer {
            Layer::H => {
                if h[(walker.i, walker.j)] == 0 {
                    break;
                }
                match hp[(walker.i, walker.j)] {
                    None => break,
                    Some(pred) => match pred.layer {
                        Layer::H => walker.step(Step::Diag),
                        // E/F predecessors sit at the same cell; hand the
                        // walk over without emitting.
                        other => layer = other,
                    },
                }
            }
            Layer::E => match ep[(walker.i, walker.j)] {
                None => break,
                Some(pred) => {
                    walker.step(Step::Left);
                    layer = pred.layer;
                }
            },
            Layer::F => match fp[(walker.i, walker.j)] {
                None => break,
                Some(pred) => {
                    walker.step(Step::Up);
                    layer = pred.layer;
                }
            },
        }
    }
    walker.finish(best)
}
