// matrix-calc/src/main.rs
mod input; // Declare the input module

use input::TokenReader;
use matrix_core::{DenseMatrix, MatrixError};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());

    // --- Input ---
    println!("Enter rows, columns and elements for the first matrix:");
    let a = reader.read_matrix("matrix A")?;
    println!("Enter rows, columns and elements for the second matrix:");
    let b = reader.read_matrix("matrix B")?;

    // --- Display operands ---
    println!("\nFirst Matrix:");
    display(&a);
    println!("Second Matrix:");
    display(&b);
    println!();

    // --- Operations, each reported independently ---
    report("Addition", a.add(&b));
    report("Subtraction", a.sub(&b));
    report("Multiplication", a.mul(&b));

    // Failed operations are reported above, never fatal
    Ok(())
}

/// Renders a matrix one row per line, elements separated by spaces.
fn display(matrix: &DenseMatrix<i32>) {
    for row in matrix.rows_iter() {
        let line: Vec<String> = row.iter().map(i32::to_string).collect();
        println!("{}", line.join(" "));
    }
}

fn report(operation: &str, result: Result<DenseMatrix<i32>, MatrixError>) {
    match result {
        Ok(matrix) => {
            println!("{operation} Result:");
            display(&matrix);
        }
        Err(e) => println!("{operation} Error: {e}"),
    }
}
