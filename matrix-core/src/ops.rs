//! Arithmetic operations on dense matrices.
//!
//! All operations are pure: operands are never mutated and each returns a
//! freshly constructed result matrix. Arithmetic wraps on overflow,
//! matching fixed-width integer semantics.

use crate::dense_matrix::DenseMatrix;
use crate::error::{MatrixError, MatrixOp};
use crate::traits::Matrix;
use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};
use std::fmt::Debug;

impl<T> DenseMatrix<T>
where
    T: PrimInt + WrappingAdd + WrappingSub + WrappingMul + Debug,
{
    /// Element-wise addition. Both operands must have identical dimensions.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_dims(other, MatrixOp::Add)?;
        let data: Vec<T> = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a.wrapping_add(b))
            .collect();
        Self::from_data(self.rows(), self.cols(), data)
    }

    /// Element-wise subtraction. Both operands must have identical dimensions.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_dims(other, MatrixOp::Sub)?;
        let data: Vec<T> = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a.wrapping_sub(b))
            .collect();
        Self::from_data(self.rows(), self.cols(), data)
    }

    /// Matrix multiplication (naive triple loop). Requires
    /// `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`.
    pub fn mul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols() != other.rows() {
            return Err(self.mismatch(other, MatrixOp::Mul));
        }
        log::debug!(
            "multiplying {}x{} by {}x{}",
            self.rows(),
            self.cols(),
            other.rows(),
            other.cols()
        );

        let (m, n, inner) = (self.rows(), other.cols(), self.cols());
        let mut result = Self::zeros(m, n)?;
        let rhs = other.as_slice();
        for i in 0..m {
            let lhs_row = self.row_unchecked(i);
            let out_row = &mut result.data_mut()[i * n..(i + 1) * n];
            for k in 0..inner {
                let a = lhs_row[k];
                for (j, out) in out_row.iter_mut().enumerate() {
                    *out = out.wrapping_add(&a.wrapping_mul(&rhs[k * n + j]));
                }
            }
        }
        Ok(result)
    }

    fn check_same_dims(&self, other: &Self, op: MatrixOp) -> Result<(), MatrixError> {
        if self.dims() != other.dims() {
            return Err(self.mismatch(other, op));
        }
        Ok(())
    }

    fn mismatch(&self, other: &Self, op: MatrixOp) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            lhs_rows: self.rows(),
            lhs_cols: self.cols(),
            rhs_rows: other.rows(),
            rhs_cols: other.cols(),
        }
    }
}
