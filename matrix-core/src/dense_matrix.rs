use crate::error::MatrixError;
use crate::traits::Matrix;
use num_traits::PrimInt;
use std::fmt::Debug;

/// Represents a dense integer matrix stored in row-major order on the CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<T: PrimInt + Debug> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // Data stored row-major: data[row * cols + col]
}

impl<T: PrimInt + Debug> DenseMatrix<T> {
    /// Creates a new DenseMatrix from raw data and dimensions, assuming
    /// row-major order. Requires exactly `rows * cols` values.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        Self::check_dims(rows, cols)?;
        let needed = rows * cols;
        if data.len() != needed {
            return Err(MatrixError::InsufficientData {
                needed,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a new DenseMatrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }

    fn check_dims(rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(())
    }

    /// Gets the element at the specified row and column.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Returns one row as a slice. Panics if `row` is out of bounds, so it
    /// is reserved for callers that already validated the index.
    pub(crate) fn row_unchecked(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a row-major slice view of the underlying data vector.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the storage, only for result population during
    /// construction inside this crate.
    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the rows of the matrix, each as a slice.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }
}

// Implement the generic Matrix trait
impl<T: PrimInt + Debug> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}
