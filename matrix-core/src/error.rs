use thiserror::Error;

/// Operation label carried by [`MatrixError::DimensionMismatch`] so the
/// caller can report which arithmetic operation rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    Add,
    Sub,
    Mul,
}

impl std::fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixOp::Add => write!(f, "addition"),
            MatrixOp::Sub => write!(f, "subtraction"),
            MatrixOp::Mul => write!(f, "multiplication"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid matrix dimensions: {rows}x{cols} (rows and columns must be positive)")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("insufficient data: {got} values supplied, {needed} required")]
    InsufficientData { needed: usize, got: usize },

    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("dimension mismatch for {op}: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        op: MatrixOp,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
}
