//! Compact text notation: values separated by `,`, matrix rows separated by `/`.
//!
//! `1,2,3/2,2,3/3,3,3` is the 3x3 matrix with rows `[1 2 3]`, `[2 2 3]` and `[3 3 3]`.

use std::fmt;
use std::str::FromStr;

use crate::{Matrix, Vector};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    Rows(&'static str),
    Columns(&'static str),
    Value,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows(message) | Self::Columns(message) => write!(f, "{message}"),
            Self::Value => write!(f, "Expected a number."),
        }
    }
}

impl std::error::Error for ParseError {}

impl<const N: usize> FromStr for Vector<N> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut vector = Self::zeros();

        let mut values = s.split(',');
        for value in vector.iter_mut() {
            let text = values
                .next()
                .ok_or(ParseError::Columns("Not enough values in row."))?;
            *value = text.trim().parse().map_err(|_| ParseError::Value)?;
        }

        if values.next().is_some() {
            return Err(ParseError::Columns("Too many values in row."));
        }

        Ok(vector)
    }
}

impl<const N: usize> FromStr for Matrix<N> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut matrix = Self::zeros();

        let mut rows = s.split('/');
        for target in matrix.iter_mut() {
            let row = rows
                .next()
                .ok_or(ParseError::Rows("Not enough rows in matrix."))?;
            *target = row.parse()?;
        }

        if rows.next().is_some() {
            return Err(ParseError::Rows("Too many rows in matrix."));
        }

        Ok(matrix)
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        Ok(())
    }
}
