use num_traits::PrimInt;
use std::fmt::Debug;

/// Generic trait representing a matrix.
/// Implementations share the dimension queries regardless of storage layout.
pub trait Matrix: Debug {
    /// The underlying integer type of the matrix elements (e.g., i32, i64).
    type Value: PrimInt + Debug;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }
}
