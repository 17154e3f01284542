//! Input collaborator: reads whitespace-separated integer tokens from any
//! buffered source and assembles matrices from them.

use matrix_core::{DenseMatrix, MatrixError};
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended while expecting {expected}")]
    Eof { expected: &'static str },

    #[error("malformed token '{token}' while expecting {expected}")]
    Malformed { token: String, expected: &'static str },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Yields integers from whitespace-separated tokens, spanning lines as
/// needed.
pub struct TokenReader<R: BufRead> {
    source: R,
    pending: Vec<String>, // Tokens of the current line, in reverse order
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: Vec::new(),
        }
    }

    /// Reads the next integer token. `expected` names what the token is
    /// for, so errors can point at the missing piece of input.
    pub fn next_int(&mut self, expected: &'static str) -> Result<i32, InputError> {
        let token = self.next_token(expected)?;
        token
            .parse::<i32>()
            .map_err(|_| InputError::Malformed { token, expected })
    }

    fn next_token(&mut self, expected: &'static str) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Err(InputError::Eof { expected });
            }
            self.pending
                .extend(line.split_whitespace().rev().map(str::to_owned));
        }
    }

    /// Reads `rows cols` followed by `rows * cols` elements in row-major
    /// order, and builds the matrix.
    pub fn read_matrix(&mut self, name: &str) -> Result<DenseMatrix<i32>, InputError> {
        let rows = self.next_int("a row count")?;
        let cols = self.next_int("a column count")?;
        // Negative counts are invalid dimensions, not a parse failure
        if rows < 0 || cols < 0 {
            return Err(MatrixError::InvalidDimension {
                rows: rows.max(0) as usize,
                cols: cols.max(0) as usize,
            }
            .into());
        }
        let (rows, cols) = (rows as usize, cols as usize);

        log::info!("reading {name}: {rows}x{cols}");
        let mut elements = Vec::with_capacity(rows.saturating_mul(cols));
        for _ in 0..rows * cols {
            elements.push(self.next_int("a matrix element")?);
        }
        Ok(DenseMatrix::from_data(rows, cols, elements)?)
    }
}
