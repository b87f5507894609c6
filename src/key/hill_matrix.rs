//! Hill key matrix and its inverse modulo 26.
//!
//! The determinant is computed exactly over the integers with fraction-free
//! (Bareiss) elimination, then reduced modulo 26. The inverse matrix is the
//! adjugate scaled by the modular inverse of the determinant.

use crate::engine::CipherKind;
use crate::error::{CipherError, Result};
use crate::utils::modular::{self, reduce};

/// Largest accepted matrix dimension.
///
/// Entries are reduced to `0..26` before elimination. By Hadamard's bound
/// every Bareiss intermediate of a 10×10 matrix is below `(25·√10)^10`,
/// about `9.5e18`, so the product of two of them stays under `i128::MAX`.
pub const MAX_DIMENSION: usize = 10;

/// Square key matrix invertible modulo 26, with its precomputed inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillKey {
    matrix: Vec<Vec<u8>>,
    inverse: Vec<Vec<u8>>,
    determinant: u8,
}

impl HillKey {
    /// Validates `matrix` and computes its inverse modulo 26.
    ///
    /// Entries are reduced modulo 26 first, so negative values are accepted.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if the matrix is empty, not square,
    /// larger than [`MAX_DIMENSION`], or its determinant modulo 26 shares a
    /// factor with 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::key::HillKey;
    ///
    /// let key = HillKey::new(&[vec![3, 3], vec![2, 5]]).unwrap();
    /// assert_eq!(key.determinant(), 9);
    /// assert_eq!(key.inverse(), &[vec![15u8, 17], vec![20, 9]]);
    ///
    /// assert!(HillKey::new(&[vec![2, 4], vec![1, 2]]).is_err());
    /// ```
    pub fn new(matrix: &[Vec<i64>]) -> Result<Self> {
        let n = matrix.len();
        if n == 0 {
            return Err(invalid("matrix is empty"));
        }
        if n > MAX_DIMENSION {
            return Err(invalid(format!(
                "matrix dimension {} exceeds the maximum of {}",
                n, MAX_DIMENSION
            )));
        }
        if let Some((i, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(invalid(format!(
                "matrix must be square: row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }

        let reduced: Vec<Vec<u8>> = matrix
            .iter()
            .map(|row| row.iter().map(|&v| reduce(v)).collect())
            .collect();

        let determinant = determinant(&reduced) as u8;
        let det_inv = modular::mod_inverse(determinant as i64).ok_or_else(|| {
            invalid(format!(
                "determinant {} is not invertible modulo 26",
                determinant
            ))
        })?;

        let adjugate = adjugate(&reduced);
        let inverse = adjugate
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| reduce(v * det_inv as i64))
                    .collect()
            })
            .collect();

        Ok(HillKey {
            matrix: reduced,
            inverse,
            determinant,
        })
    }

    /// Matrix dimension (block size).
    pub fn dimension(&self) -> usize {
        self.matrix.len()
    }

    /// Key matrix with entries in `0..26`.
    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    /// Inverse key matrix modulo 26.
    pub fn inverse(&self) -> &[Vec<u8>] {
        &self.inverse
    }

    /// Determinant modulo 26.
    pub fn determinant(&self) -> u8 {
        self.determinant
    }
}

fn invalid(reason: impl Into<String>) -> CipherError {
    CipherError::invalid_key(CipherKind::Hill, reason)
}

/// Multiplies `matrix` by column vector `v`, reducing modulo 26.
pub(crate) fn mul_vector(matrix: &[Vec<u8>], v: &[u8]) -> Vec<u8> {
    matrix
        .iter()
        .map(|row| {
            let sum: i64 = row
                .iter()
                .zip(v)
                .map(|(&m, &x)| m as i64 * x as i64)
                .sum();
            reduce(sum)
        })
        .collect()
}

/// Determinant modulo 26, eliminated exactly over the integers (Bareiss).
fn determinant(matrix: &[Vec<u8>]) -> i64 {
    let n = matrix.len();
    if n == 0 {
        return 1;
    }
    let mut a: Vec<Vec<i128>> = matrix
        .iter()
        .map(|row| row.iter().map(|&v| v as i128).collect())
        .collect();
    let mut sign: i128 = 1;
    let mut prev: i128 = 1;

    for k in 0..n - 1 {
        if a[k][k] == 0 {
            match (k + 1..n).find(|&i| a[i][k] != 0) {
                Some(i) => {
                    a.swap(k, i);
                    sign = -sign;
                }
                None => return 0,
            }
        }
        for i in k + 1..n {
            for j in k + 1..n {
                a[i][j] = (a[i][j] * a[k][k] - a[i][k] * a[k][j]) / prev;
            }
        }
        prev = a[k][k];
    }

    ((sign * a[n - 1][n - 1]).rem_euclid(modular::MODULUS as i128)) as i64
}

/// Matrix of `matrix` without row `skip_row` and column `skip_col`.
fn minor(matrix: &[Vec<u8>], skip_row: usize, skip_col: usize) -> Vec<Vec<u8>> {
    matrix
        .iter()
        .enumerate()
        .filter(|(r, _)| *r != skip_row)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|(c, _)| *c != skip_col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Adjugate (transposed cofactor matrix), entries modulo 26.
fn adjugate(matrix: &[Vec<u8>]) -> Vec<Vec<i64>> {
    let n = matrix.len();
    let mut adj = vec![vec![0i64; n]; n];
    if n == 1 {
        adj[0][0] = 1;
        return adj;
    }
    for (r, row) in adj.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            // adj[r][c] is the cofactor of entry (c, r)
            let cofactor = determinant(&minor(matrix, c, r));
            let signed = if (r + c).is_multiple_of(2) { cofactor } else { -cofactor };
            *cell = signed.rem_euclid(modular::MODULUS);
        }
    }
    adj
}
