use std::fmt;
use std::mem;
use std::ops::{
    Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use serde::{Deserialize, Serialize};

use crate::sqrt::inverse_sqrt;
use crate::{array_serde, Value, ValueType};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    X = 0,
    Y,
    Z,
    W,
}

impl Axis {
    pub fn index(self) -> usize {
        self as usize
    }
}

#[repr(transparent)]
#[derive(Clone, Copy, Deserialize, PartialEq, Serialize)]
pub struct Vector<const N: usize>(#[serde(with = "array_serde")] [Value; N]);

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

/// Four-component storage for rotations. No quaternion algebra is provided.
pub type Quat = Vector<4>;

impl<const N: usize> Vector<N> {
    pub const ELEMENTS: usize = N;

    /// Size in bytes of the packed components.
    pub const SIZE: usize = N * mem::size_of::<Value>();

    pub const fn zeros() -> Self {
        Self([Value::ZERO; N])
    }

    pub const fn ones() -> Self {
        Self([Value::ONE; N])
    }

    pub const fn new(values: [Value; N]) -> Self {
        Self(values)
    }

    /// The unit vector along `axis`, or `None` if this vector has no such axis.
    pub fn unit(axis: Axis) -> Option<Self> {
        let index = axis.index();
        if index >= N {
            return None;
        }

        let mut vector = Self::zeros();
        vector[index] = Value::ONE;
        Some(vector)
    }

    pub fn dot(&self, b: &Self) -> Value {
        self.iter().zip(b).map(|(a, b)| a * b).sum()
    }

    pub fn squared_magnitude(&self) -> Value {
        self.dot(self)
    }

    pub fn magnitude(&self) -> Value {
        self.squared_magnitude().sqrt()
    }

    /// Scales to unit length. The zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let squared_magnitude = self.squared_magnitude();
        if squared_magnitude == Value::ZERO {
            return *self;
        }

        self * inverse_sqrt(squared_magnitude)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl Vector<3> {
    pub fn cross(&self, b: &Self) -> Self {
        let [x1, y1, z1] = self.0;
        let [x2, y2, z2] = b.0;
        Self([y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2])
    }
}

macro_rules! op_impl {
    ($op:ident, $op_method:ident, $op_assign:ident, $op_assign_method:ident) => {
        impl<const N: usize> $op<Value> for Vector<N> {
            type Output = Vector<N>;

            fn $op_method(mut self, rhs: Value) -> Self::Output {
                self.$op_assign_method(rhs);
                self
            }
        }

        impl<const N: usize> $op<Value> for &Vector<N> {
            type Output = Vector<N>;

            fn $op_method(self, rhs: Value) -> Self::Output {
                (*self).$op_method(rhs)
            }
        }

        impl<const N: usize> $op<Vector<N>> for Vector<N> {
            type Output = Vector<N>;

            fn $op_method(mut self, rhs: Vector<N>) -> Self::Output {
                self.$op_assign_method(rhs);
                self
            }
        }

        impl<const N: usize> $op<Vector<N>> for &Vector<N> {
            type Output = Vector<N>;

            fn $op_method(self, rhs: Vector<N>) -> Self::Output {
                (*self).$op_method(rhs)
            }
        }

        impl<const N: usize> $op<&Vector<N>> for Vector<N> {
            type Output = Vector<N>;

            fn $op_method(mut self, rhs: &Vector<N>) -> Self::Output {
                self.$op_assign_method(rhs);
                self
            }
        }

        impl<const N: usize> $op<&Vector<N>> for &Vector<N> {
            type Output = Vector<N>;

            fn $op_method(self, rhs: &Vector<N>) -> Self::Output {
                (*self).$op_method(rhs)
            }
        }

        impl<const N: usize> $op_assign<Value> for Vector<N> {
            fn $op_assign_method(&mut self, rhs: Value) {
                for r in self.iter_mut() {
                    (*r).$op_assign_method(rhs)
                }
            }
        }

        impl<const N: usize> $op_assign<Vector<N>> for Vector<N> {
            fn $op_assign_method(&mut self, rhs: Vector<N>) {
                for (r, b) in self.iter_mut().zip(*rhs) {
                    (*r).$op_assign_method(b)
                }
            }
        }

        impl<const N: usize> $op_assign<&Vector<N>> for Vector<N> {
            fn $op_assign_method(&mut self, rhs: &Vector<N>) {
                for (r, b) in self.iter_mut().zip(**rhs) {
                    (*r).$op_assign_method(b)
                }
            }
        }
    };
}

op_impl!(Add, add, AddAssign, add_assign);
op_impl!(Sub, sub, SubAssign, sub_assign);
op_impl!(Mul, mul, MulAssign, mul_assign);
op_impl!(Div, div, DivAssign, div_assign);

impl<const N: usize> Neg for Vector<N> {
    type Output = Vector<N>;

    fn neg(self) -> Self::Output {
        self * -Value::ONE
    }
}

impl<const N: usize> Neg for &Vector<N> {
    type Output = Vector<N>;

    fn neg(self) -> Self::Output {
        self * -Value::ONE
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> Deref for Vector<N> {
    type Target = [Value; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Vector<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Value; N]> for Vector<N> {
    fn from(values: [Value; N]) -> Self {
        Self(values)
    }
}

impl<'a, const N: usize> IntoIterator for &'a Vector<N> {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for x in 0..N {
            fmt::Debug::fmt(&self[x], f)?;
            if x < N - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit() {
        assert_eq!(Vec2::unit(Axis::X), Some([1.0, 0.0].into()));
        assert_eq!(Vec3::unit(Axis::Y), Some([0.0, 1.0, 0.0].into()));
        assert_eq!(Vec4::unit(Axis::W), Some([0.0, 0.0, 0.0, 1.0].into()));
        assert_eq!(Vec2::unit(Axis::Z), None);
        assert_eq!(Vec3::unit(Axis::W), None);
    }

    #[test]
    fn arithmetic() {
        let a: Vec3 = [1.0, 2.0, 3.0].into();
        let b: Vec3 = [4.0, -5.0, 6.0].into();

        assert_eq!(a + b, [5.0, -3.0, 9.0].into());
        assert_eq!(a - b, [-3.0, 7.0, -3.0].into());
        assert_eq!(a * 2.0, [2.0, 4.0, 6.0].into());
        assert_eq!(&b / 2.0, [2.0, -2.5, 3.0].into());
        assert_eq!(-a, [-1.0, -2.0, -3.0].into());

        let mut c = a;
        c += b;
        c *= 0.5;
        assert_eq!(c, [2.5, -1.5, 4.5].into());
    }

    #[test]
    fn dot() {
        let a: Vec4 = [1.0, 2.0, 3.0, 4.0].into();
        let b: Vec4 = [5.0, 6.0, 7.0, 8.0].into();
        assert_eq!(a.dot(&b), 70.0);
        assert_eq!(a.squared_magnitude(), 30.0);
        assert_eq!(Vec2::new([3.0, 4.0]).magnitude(), 5.0);
    }

    #[test]
    fn cross() {
        let x = Vec3::unit(Axis::X).unwrap();
        let y = Vec3::unit(Axis::Y).unwrap();
        let z = Vec3::unit(Axis::Z).unwrap();
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);

        let a: Vec3 = [1.0, 2.0, 3.0].into();
        let b: Vec3 = [4.0, -5.0, 6.0].into();
        let c = a.cross(&b);
        assert_eq!(c, [27.0, 6.0, -13.0].into());
        assert_eq!(b.cross(&a), -c);
        assert_eq!(c.dot(&a), 0.0);
        assert_eq!(c.dot(&b), 0.0);
    }

    #[test]
    fn normalize() {
        let v: Vec3 = [3.0, 0.0, 4.0].into();
        let n = v.normalize();
        assert!((n.magnitude() - 1.0).abs() < 2e-3);
        assert!((n[0] - 0.6).abs() < 2e-3);
        assert!((n[2] - 0.8).abs() < 2e-3);

        assert_eq!(Vec4::zeros().normalize(), Vec4::zeros());
    }

    #[test]
    fn layout() {
        assert_eq!(Vec2::ELEMENTS, 2);
        assert_eq!(Vec3::SIZE, 12);
        assert_eq!(Vec4::SIZE, mem::size_of::<Vec4>());
        assert_eq!(Vec3::new([1.0, 2.0, 3.0]).as_slice(), &[1.0, 2.0, 3.0]);
    }
}
