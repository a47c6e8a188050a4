use clap::{Args as ArgsTrait, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON instead of matrix notation.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the determinant of a matrix.
    Determinant(MatrixArg),
    /// Prints the inverse of a matrix. Fails if the matrix is singular.
    Inverse(MatrixArg),
    /// Prints the transpose of a matrix.
    Transpose(MatrixArg),
    /// Prints the product of two matrices of the same size.
    Multiply(ProductArgs),
}

#[derive(ArgsTrait, Clone, Debug)]
pub struct MatrixArg {
    /// A 2x2, 3x3 or 4x4 matrix. Values are separated by commas and rows by slashes.
    ///
    /// Example: 1,2,3/2,2,3/3,3,3
    #[arg(allow_hyphen_values = true, verbatim_doc_comment)]
    pub matrix: String,
}

#[derive(ArgsTrait, Clone, Debug)]
pub struct ProductArgs {
    /// The left-hand matrix.
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// The right-hand matrix.
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}
