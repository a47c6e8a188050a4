use std::fmt;

use serde::Serialize;
use tracing::debug;

use vecmat::{Matrix, MatrixError, ParseError, Square};

use crate::args::{Command, MatrixArg, ProductArgs};

#[derive(Debug)]
pub enum EvaluateError {
    Parse(ParseError),
    Matrix(MatrixError),
    Size(usize),
    SizeMismatch(usize, usize),
    Json(serde_json::Error),
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "invalid matrix: {error}"),
            Self::Matrix(error) => write!(f, "{error}"),
            Self::Size(size) => write!(f, "unsupported matrix size: {size}x{size}"),
            Self::SizeMismatch(a, b) => write!(f, "cannot multiply {a}x{a} by {b}x{b}"),
            Self::Json(error) => write!(f, "could not encode result: {error}"),
        }
    }
}

impl From<ParseError> for EvaluateError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<MatrixError> for EvaluateError {
    fn from(error: MatrixError) -> Self {
        Self::Matrix(error)
    }
}

impl From<serde_json::Error> for EvaluateError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Format {
    Notation,
    Json,
}

impl Format {
    fn render<T: fmt::Display + Serialize>(self, value: &T) -> Result<String, EvaluateError> {
        match self {
            Format::Notation => Ok(value.to_string()),
            Format::Json => Ok(serde_json::to_string(value)?),
        }
    }
}

/// The number of rows in matrix notation.
fn size(matrix: &str) -> usize {
    matrix.split('/').count()
}

macro_rules! sized {
    ($size:expr, $function:ident($($arg:expr),*)) => {
        match $size {
            2 => $function::<2>($($arg),*),
            3 => $function::<3>($($arg),*),
            4 => $function::<4>($($arg),*),
            size => Err(EvaluateError::Size(size)),
        }
    };
}

pub fn evaluate(command: &Command, format: Format) -> Result<String, EvaluateError> {
    match command {
        Command::Determinant(MatrixArg { matrix }) => {
            sized!(size(matrix), determinant(matrix, format))
        }
        Command::Inverse(MatrixArg { matrix }) => sized!(size(matrix), inverse(matrix, format)),
        Command::Transpose(MatrixArg { matrix }) => {
            sized!(size(matrix), transpose(matrix, format))
        }
        Command::Multiply(ProductArgs { a, b }) => {
            let (a_size, b_size) = (size(a), size(b));
            if a_size != b_size {
                return Err(EvaluateError::SizeMismatch(a_size, b_size));
            }
            sized!(a_size, multiply(a, b, format))
        }
    }
}

fn parse<const N: usize>(matrix: &str) -> Result<Matrix<N>, EvaluateError> {
    let matrix = matrix.parse::<Matrix<N>>()?;
    debug!(?matrix, size = N, "Parsed matrix.");
    Ok(matrix)
}

fn determinant<const N: usize>(matrix: &str, format: Format) -> Result<String, EvaluateError>
where
    Matrix<N>: Square,
{
    format.render(&parse::<N>(matrix)?.determinant())
}

fn inverse<const N: usize>(matrix: &str, format: Format) -> Result<String, EvaluateError>
where
    Matrix<N>: Square,
{
    format.render(&parse::<N>(matrix)?.inverse()?)
}

fn transpose<const N: usize>(matrix: &str, format: Format) -> Result<String, EvaluateError> {
    format.render(&parse::<N>(matrix)?.transpose())
}

fn multiply<const N: usize>(a: &str, b: &str, format: Format) -> Result<String, EvaluateError> {
    format.render(&(parse::<N>(a)? * parse::<N>(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(value: &str) -> MatrixArg {
        MatrixArg {
            matrix: value.to_owned(),
        }
    }

    #[test]
    fn determinant() {
        let command = Command::Determinant(matrix("1,2,3/2,2,3/3,3,3"));
        assert_eq!(evaluate(&command, Format::Notation).unwrap(), "3");
        assert_eq!(evaluate(&command, Format::Json).unwrap(), "3.0");
    }

    #[test]
    fn inverse() {
        let command = Command::Inverse(matrix("1,2/3,4"));
        assert_eq!(evaluate(&command, Format::Notation).unwrap(), "-2,1/1.5,-0.5");
        assert_eq!(
            evaluate(&command, Format::Json).unwrap(),
            "[[-2.0,1.0],[1.5,-0.5]]"
        );

        let command = Command::Inverse(matrix("1,1,1/1,1,1/1,1,1"));
        assert!(matches!(
            evaluate(&command, Format::Notation),
            Err(EvaluateError::Matrix(MatrixError::Singular))
        ));
    }

    #[test]
    fn transpose() {
        let command = Command::Transpose(matrix("1,2,3,4/5,6,7,8/9,10,11,12/13,14,15,16"));
        assert_eq!(
            evaluate(&command, Format::Notation).unwrap(),
            "1,5,9,13/2,6,10,14/3,7,11,15/4,8,12,16"
        );
    }

    #[test]
    fn multiply() {
        let command = Command::Multiply(ProductArgs {
            a: "1,2/3,4".to_owned(),
            b: "5,6/7,8".to_owned(),
        });
        assert_eq!(evaluate(&command, Format::Notation).unwrap(), "19,22/43,50");

        let command = Command::Multiply(ProductArgs {
            a: "1,2/3,4".to_owned(),
            b: "1,0,0/0,1,0/0,0,1".to_owned(),
        });
        assert!(matches!(
            evaluate(&command, Format::Notation),
            Err(EvaluateError::SizeMismatch(2, 3))
        ));
    }

    #[test]
    fn unsupported_sizes() {
        let command = Command::Determinant(matrix("1"));
        assert!(matches!(
            evaluate(&command, Format::Notation),
            Err(EvaluateError::Size(1))
        ));

        let command = Command::Determinant(matrix("1,0/0,1/0,0/0,0/1,1"));
        assert!(matches!(
            evaluate(&command, Format::Notation),
            Err(EvaluateError::Size(5))
        ));

        let command = Command::Determinant(matrix("1,0,0/0,1/0,0,1"));
        assert!(matches!(
            evaluate(&command, Format::Notation),
            Err(EvaluateError::Parse(_))
        ));
    }
}
