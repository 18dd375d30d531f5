//! Cholesky factorisation for correlated normal sampling.

use hedger_core::types::PricingError;

/// Builds the `n x n` equicorrelation matrix: ones on the diagonal,
/// `rho` everywhere else.
pub fn equicorrelation_matrix(n: usize, rho: f64) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { rho }).collect())
        .collect()
}

/// Lower-triangular Cholesky factor of a symmetric positive-definite
/// matrix, so that `L * L^T = M`.
///
/// Dimensions here are the number of basket underlyings, so the plain
/// `O(n^3)` loop is more than fast enough.
///
/// # Errors
/// `PricingError::NumericalInstability` if the matrix is not positive
/// definite (a negative or vanishing pivot appears).
pub fn cholesky(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, PricingError> {
    let n = matrix.len();
    let mut lower = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let sum: f64 = (0..j).map(|k| lower[i][k] * lower[j][k]).sum();
            if i == j {
                let pivot = matrix[i][i] - sum;
                if pivot <= 0.0 {
                    return Err(PricingError::NumericalInstability(format!(
                        "matrix not positive definite at row {}",
                        i
                    )));
                }
                lower[i][j] = pivot.sqrt();
            } else {
                let pivot = lower[j][j];
                lower[i][j] = (matrix[i][j] - sum) / pivot;
            }
        }
    }

    Ok(lower)
}

/// Applies the factor in place: `out = L * z`.
pub(crate) fn correlate(lower: &[Vec<f64>], z: &[f64], out: &mut [f64]) {
    for (i, row) in lower.iter().enumerate() {
        out[i] = row[..=i]
            .iter()
            .zip(z[..=i].iter())
            .map(|(l, z)| l * z)
            .sum();
    }
}
