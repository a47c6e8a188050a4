//! Determinants and inverses by cofactor expansion.
//!
//! The 2x2 case is closed-form. Larger ranks share one routine: a minor is the
//! matrix with one row and one column excluded, the determinant is the Laplace
//! expansion along the first row, and the inverse is the transposed cofactor
//! matrix scaled by the reciprocal of the determinant.

use std::fmt;
use std::ops::Mul;

use tracing::{instrument, trace};

use crate::matrix::{Matrix, MatrixError};
use crate::{Value, ValueType};

pub trait Square: Copy + fmt::Debug {
    fn determinant(&self) -> Value;

    /// The determinant of the minor excluding `row` and `column`, negated when
    /// `row + column` is odd.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of range.
    fn cofactor(&self, row: usize, column: usize) -> Value;

    /// The matrix of every cofactor.
    fn cofactors(&self) -> Self;

    /// The transposed cofactor matrix.
    fn adjugate(&self) -> Self;

    /// Fails with [`MatrixError::Singular`] when the determinant is exactly
    /// zero. Near-singular matrices are inverted as-is.
    #[instrument(level = "trace")]
    fn inverse(&self) -> Result<Self, MatrixError>
    where
        Self: Mul<Value, Output = Self>,
    {
        let determinant = self.determinant();
        if determinant == Value::ZERO {
            trace!("Singular matrix.");
            return Err(MatrixError::Singular);
        }

        Ok(self.adjugate() * (Value::ONE / determinant))
    }

    /// Writes the inverse into `dest`. On failure `dest` is not touched.
    fn inverse_into(&self, dest: &mut Self) -> Result<(), MatrixError>
    where
        Self: Mul<Value, Output = Self>,
    {
        *dest = self.inverse()?;
        Ok(())
    }

    /// Replaces `self` with its inverse. On failure `self` is not touched.
    fn invert(&mut self) -> Result<(), MatrixError>
    where
        Self: Mul<Value, Output = Self>,
    {
        *self = self.inverse()?;
        Ok(())
    }
}

fn sign(row: usize, column: usize) -> Value {
    if (row + column) % 2 == 0 {
        Value::ONE
    } else {
        -Value::ONE
    }
}

impl Square for Matrix<2> {
    fn determinant(&self) -> Value {
        let [[a, b], [c, d]] = self.to_array();
        a * d - b * c
    }

    fn cofactor(&self, row: usize, column: usize) -> Value {
        assert!(row < 2 && column < 2, "cofactor index out of range");
        sign(row, column) * self[1 - row][1 - column]
    }

    fn cofactors(&self) -> Self {
        let [[a, b], [c, d]] = self.to_array();
        [[d, -c], [-b, a]].into()
    }

    fn adjugate(&self) -> Self {
        let [[a, b], [c, d]] = self.to_array();
        [[d, -b], [-c, a]].into()
    }
}

/// Copies `matrix` without `row` and `column`. `M` must be `N - 1`.
fn minor<const N: usize, const M: usize>(matrix: &Matrix<N>, row: usize, column: usize) -> Matrix<M> {
    debug_assert_eq!(M + 1, N);
    assert!(row < N && column < N, "minor index out of range");

    let mut minor = Matrix::zeros();
    let rows = matrix.iter().enumerate().filter(|&(r, _)| r != row);
    for (target, (_, source)) in minor.iter_mut().zip(rows) {
        let values = source.iter().enumerate().filter(|&(c, _)| c != column);
        for (value, (_, &source_value)) in target.iter_mut().zip(values) {
            *value = source_value;
        }
    }
    minor
}

fn expanded_cofactor<const N: usize, const M: usize>(
    matrix: &Matrix<N>,
    row: usize,
    column: usize,
) -> Value
where
    Matrix<M>: Square,
{
    sign(row, column) * minor::<N, M>(matrix, row, column).determinant()
}

fn expanded_determinant<const N: usize, const M: usize>(matrix: &Matrix<N>) -> Value
where
    Matrix<M>: Square,
{
    matrix[0]
        .iter()
        .enumerate()
        .map(|(column, value)| value * expanded_cofactor::<N, M>(matrix, 0, column))
        .sum()
}

fn expanded_cofactors<const N: usize, const M: usize>(matrix: &Matrix<N>) -> Matrix<N>
where
    Matrix<M>: Square,
{
    let mut cofactors = Matrix::zeros();
    for (row, values) in cofactors.iter_mut().enumerate() {
        for (column, value) in values.iter_mut().enumerate() {
            *value = expanded_cofactor::<N, M>(matrix, row, column);
        }
    }
    cofactors
}

macro_rules! square_impl {
    ($rank:literal, $minor_rank:literal) => {
        impl Square for Matrix<$rank> {
            fn determinant(&self) -> Value {
                expanded_determinant::<$rank, $minor_rank>(self)
            }

            fn cofactor(&self, row: usize, column: usize) -> Value {
                expanded_cofactor::<$rank, $minor_rank>(self, row, column)
            }

            fn cofactors(&self) -> Self {
                expanded_cofactors::<$rank, $minor_rank>(self)
            }

            fn adjugate(&self) -> Self {
                self.cofactors().transpose()
            }
        }
    };
}

square_impl!(3, 2);
square_impl!(4, 3);
