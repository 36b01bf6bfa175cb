//! Thin singular value decomposition
//!
//! The latent-dimension ranker only needs the singular values and the right
//! singular vectors of the term–sentence matrix, so the decomposition works
//! on the n×n Gram matrix `AᵗA`: its eigenvalues are the squared singular
//! values and its eigenvectors are the rows of `Vᵗ`. Eigenpairs are
//! extracted one at a time by power iteration with deflation.

use ndarray::{Array1, Array2, Axis};

const POWER_STEPS: usize = 100;
const NORM_TOLERANCE: f64 = 1e-12;
const DRIFT_TOLERANCE: f64 = 1e-18;

/// Reduced decomposition of an m×n matrix: `rank = min(m, n)` singular
/// values in descending order and the matching right singular vectors.
#[derive(Debug, Clone)]
pub struct ThinSvd {
    /// Singular values, descending.
    pub singular_values: Vec<f64>,
    /// Right singular vectors as rows: `rank × n`.
    pub vt: Array2<f64>,
}

impl ThinSvd {
    /// Number of retained singular values.
    pub fn rank(&self) -> usize {
        self.singular_values.len()
    }
}

/// Compute the thin SVD of `matrix`.
///
/// Deterministic: the start vector of every power iteration is fixed, so
/// repeated calls on the same matrix return identical results. Deflation
/// residue can push trailing eigenvalues slightly negative; those clamp
/// to zero.
pub fn thin_svd(matrix: &Array2<f64>) -> ThinSvd {
    let (rows, cols) = matrix.dim();
    let rank = rows.min(cols);
    if rank == 0 {
        return ThinSvd {
            singular_values: Vec::new(),
            vt: Array2::zeros((0, cols)),
        };
    }

    let mut gram = matrix.t().dot(matrix);
    let mut singular_values = Vec::with_capacity(rank);
    let mut vt = Array2::zeros((rank, cols));

    for k in 0..rank {
        let v = dominant_eigenvector(&gram);
        let lambda = v.dot(&gram.dot(&v)).max(0.0);

        singular_values.push(lambda.sqrt());
        vt.row_mut(k).assign(&v);

        // deflate: G' = G - lambda v vᵗ
        let v_col = v.clone().insert_axis(Axis(1));
        let v_row = v.insert_axis(Axis(0));
        gram = &gram - &(v_col.dot(&v_row) * lambda);
    }

    ThinSvd {
        singular_values,
        vt,
    }
}

/// Power iteration for the dominant eigenvector of a symmetric PSD matrix.
fn dominant_eigenvector(gram: &Array2<f64>) -> Array1<f64> {
    let n = gram.nrows();

    // Fixed start vector, tilted per index so it is not orthogonal to the
    // dominant eigenvector in practice.
    let mut v = Array1::from_shape_fn(n, |i| 1.0 + i as f64 * 1e-3);
    let norm = v.dot(&v).sqrt();
    v /= norm;

    for _ in 0..POWER_STEPS {
        let next = gram.dot(&v);
        let norm = next.dot(&next).sqrt();
        if norm < NORM_TOLERANCE {
            break;
        }
        let next = next / norm;
        let drift = (&next - &v).mapv(|x| x * x).sum();
        v = next;
        if drift < DRIFT_TOLERANCE {
            break;
        }
    }

    v
}
