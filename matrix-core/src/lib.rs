//! # Matrix Core Library
//!
//! Provides dense integer matrix storage and basic arithmetic
//! (addition, subtraction, multiplication) with dimension validation.

// Declare modules
pub mod dense_matrix;
pub mod error;
pub mod ops;
pub mod traits;

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use error::{MatrixError, MatrixOp};
pub use traits::Matrix;
