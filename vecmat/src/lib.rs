pub use self::cofactor::Square;
pub use self::matrix::{Mat2, Mat3, Mat4, Matrix, MatrixError};
pub use self::parse::ParseError;
pub use self::sqrt::{fast_inverse_sqrt, inverse_sqrt};
pub use self::vector::{Axis, Quat, Vec2, Vec3, Vec4, Vector};

mod array_serde;
mod cofactor;
mod matrix;
mod parse;
mod sqrt;
mod vector;

pub type Value = f32;

pub trait ValueType {
    const ZERO: Self;
    const ONE: Self;
}

impl ValueType for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}
