use std::fmt;
use std::mem;
use std::ops::{
    Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::slice;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{array_serde, Value, ValueType, Vector};

/// A square matrix stored row-major: `m[row][column]`.
///
/// Consumers expecting column-major data (most shading APIs) must be handed
/// the [transpose](Matrix::transpose); nothing here converts implicitly.
#[repr(transparent)]
#[derive(Clone, Copy, Deserialize, PartialEq, Serialize)]
pub struct Matrix<const N: usize>(#[serde(with = "array_serde")] [Vector<N>; N]);

pub type Mat2 = Matrix<2>;
pub type Mat3 = Matrix<3>;
pub type Mat4 = Matrix<4>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// The determinant is exactly zero.
    Singular,
    /// A row or column index is not in `0..N`.
    OutOfBounds,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singular => write!(f, "matrix is singular"),
            Self::OutOfBounds => write!(f, "index out of bounds"),
        }
    }
}

impl std::error::Error for MatrixError {}

impl<const N: usize> Matrix<N> {
    pub const ELEMENTS: usize = N * N;

    /// Size in bytes of the packed row-major cells.
    pub const SIZE: usize = N * N * mem::size_of::<Value>();

    pub const fn zeros() -> Self {
        Self([Vector::zeros(); N])
    }

    pub fn identity() -> Self {
        let mut result = Self::zeros();
        for (i, row) in result.iter_mut().enumerate() {
            row[i] = Value::ONE;
        }
        result
    }

    pub const fn new(rows: [Vector<N>; N]) -> Self {
        Self(rows)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.iter().flatten()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// The cells in row-major order.
    pub fn as_slice(&self) -> &[Value] {
        // Both wrappers are transparent over arrays, so the rows are contiguous.
        unsafe { slice::from_raw_parts(self.0.as_ptr().cast::<Value>(), N * N) }
    }

    pub fn to_array(&self) -> [[Value; N]; N] {
        self.0.map(|row| *row)
    }

    pub fn transpose(&self) -> Self {
        let mut result = *self;
        result.transpose_in_place();
        result
    }

    pub fn transpose_in_place(&mut self) {
        for row in 0..N {
            for column in row + 1..N {
                let value = self[row][column];
                self[row][column] = self[column][row];
                self[column][row] = value;
            }
        }
    }

    pub fn row(&self, row: usize) -> Option<Vector<N>> {
        if row >= N {
            trace!(row, "Row out of bounds.");
            return None;
        }

        Some(self[row])
    }

    pub fn column(&self, column: usize) -> Option<Vector<N>> {
        if column >= N {
            trace!(column, "Column out of bounds.");
            return None;
        }

        let mut result = Vector::zeros();
        for (value, row) in result.iter_mut().zip(self.iter()) {
            *value = row[column];
        }
        Some(result)
    }

    pub fn set_row(&mut self, row: usize, values: Vector<N>) -> Result<(), MatrixError> {
        if row >= N {
            trace!(row, "Row out of bounds.");
            return Err(MatrixError::OutOfBounds);
        }

        self[row] = values;
        Ok(())
    }

    pub fn set_column(&mut self, column: usize, values: Vector<N>) -> Result<(), MatrixError> {
        if column >= N {
            trace!(column, "Column out of bounds.");
            return Err(MatrixError::OutOfBounds);
        }

        for (row, value) in self.iter_mut().zip(values.iter()) {
            row[column] = *value;
        }
        Ok(())
    }
}

macro_rules! value_op_impl {
    ($op:ident, $op_method:ident, $op_assign:ident, $op_assign_method:ident) => {
        impl<const N: usize> $op<Value> for Matrix<N> {
            type Output = Matrix<N>;

            fn $op_method(mut self, rhs: Value) -> Self::Output {
                self.$op_assign_method(rhs);
                self
            }
        }

        impl<const N: usize> $op<Value> for &Matrix<N> {
            type Output = Matrix<N>;

            fn $op_method(self, rhs: Value) -> Self::Output {
                (*self).$op_method(rhs)
            }
        }

        impl<const N: usize> $op_assign<Value> for Matrix<N> {
            fn $op_assign_method(&mut self, rhs: Value) {
                for r in self.iter_mut() {
                    (*r).$op_assign_method(rhs)
                }
            }
        }
    };
}

value_op_impl!(Mul, mul, MulAssign, mul_assign);
value_op_impl!(Div, div, DivAssign, div_assign);

macro_rules! matrix_op_impl {
    ($op:ident, $op_method:ident, $op_assign:ident, $op_assign_method:ident) => {
        impl<const N: usize> $op<Matrix<N>> for Matrix<N> {
            type Output = Matrix<N>;

            fn $op_method(mut self, rhs: Matrix<N>) -> Self::Output {
                self.$op_assign_method(rhs);
                self
            }
        }

        impl<const N: usize> $op<Matrix<N>> for &Matrix<N> {
            type Output = Matrix<N>;

            fn $op_method(self, rhs: Matrix<N>) -> Self::Output {
                (*self).$op_method(rhs)
            }
        }

        impl<const N: usize> $op<&Matrix<N>> for Matrix<N> {
            type Output = Matrix<N>;

            fn $op_method(mut self, rhs: &Matrix<N>) -> Self::Output {
                self.$op_assign_method(rhs);
                self
            }
        }

        impl<const N: usize> $op<&Matrix<N>> for &Matrix<N> {
            type Output = Matrix<N>;

            fn $op_method(self, rhs: &Matrix<N>) -> Self::Output {
                (*self).$op_method(rhs)
            }
        }

        impl<const N: usize> $op_assign<Matrix<N>> for Matrix<N> {
            fn $op_assign_method(&mut self, rhs: Matrix<N>) {
                for (r, b) in self.iter_mut().zip(*rhs) {
                    (*r).$op_assign_method(b)
                }
            }
        }

        impl<const N: usize> $op_assign<&Matrix<N>> for Matrix<N> {
            fn $op_assign_method(&mut self, rhs: &Matrix<N>) {
                for (r, b) in self.iter_mut().zip(**rhs) {
                    (*r).$op_assign_method(b)
                }
            }
        }
    };
}

matrix_op_impl!(Add, add, AddAssign, add_assign);
matrix_op_impl!(Sub, sub, SubAssign, sub_assign);

impl<const N: usize> Mul<Matrix<N>> for Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, rhs: Matrix<N>) -> Self::Output {
        &self * &rhs
    }
}

impl<const N: usize> Mul<&Matrix<N>> for Matrix<N> {
    type Output = Matrix<N>;

    #[allow(clippy::op_ref)]
    fn mul(self, rhs: &Matrix<N>) -> Self::Output {
        &self * rhs
    }
}

impl<const N: usize> Mul<Matrix<N>> for &Matrix<N> {
    type Output = Matrix<N>;

    #[allow(clippy::op_ref)]
    fn mul(self, rhs: Matrix<N>) -> Self::Output {
        self * &rhs
    }
}

impl<const N: usize> Mul<&Matrix<N>> for &Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, rhs: &Matrix<N>) -> Self::Output {
        let columns = rhs.transpose();
        let mut result = Matrix::zeros();
        for row in 0..N {
            for column in 0..N {
                result[row][column] = self[row].dot(&columns[column]);
            }
        }
        result
    }
}

impl<const N: usize> MulAssign<Matrix<N>> for Matrix<N> {
    fn mul_assign(&mut self, rhs: Matrix<N>) {
        *self = &*self * &rhs;
    }
}

impl<const N: usize> MulAssign<&Matrix<N>> for Matrix<N> {
    fn mul_assign(&mut self, rhs: &Matrix<N>) {
        *self = &*self * rhs;
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Self::Output {
        &self * &rhs
    }
}

impl<const N: usize> Mul<&Vector<N>> for &Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: &Vector<N>) -> Self::Output {
        let mut result = Vector::zeros();
        for (value, row) in result.iter_mut().zip(self.iter()) {
            *value = row.dot(rhs);
        }
        result
    }
}

impl<const N: usize> Neg for Matrix<N> {
    type Output = Matrix<N>;

    fn neg(self) -> Self::Output {
        self * -Value::ONE
    }
}

impl<const N: usize> Neg for &Matrix<N> {
    type Output = Matrix<N>;

    fn neg(self) -> Self::Output {
        self * -Value::ONE
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> Deref for Matrix<N> {
    type Target = [Vector<N>; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Matrix<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[[Value; N]; N]> for Matrix<N> {
    fn from(values: [[Value; N]; N]) -> Self {
        Self(values.map(Vector::new))
    }
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            write!(f, "{}", if row == 0 { "[" } else { " " })?;
            for column in 0..N {
                fmt::Debug::fmt(&self[row][column], f)?;
                if column < N - 1 {
                    write!(f, " ")?;
                }
            }
            write!(f, "{}", if row < N - 1 { "\n" } else { "]" })?;
        }
        Ok(())
    }
}
