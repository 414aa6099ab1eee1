// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! A numeric value that is either real or complex.
//!
//! Arithmetic between two reals stays real, anything touching a complex
//! operand is complex. Arithmetic never narrows a complex value back to a
//! real one, see [`crate::alignment::narrow_if_real`] for the presentation
//! side of that.

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Copy, Clone, Debug)]
pub enum Scalar {
    Real(f64),
    Complex(Complex64),
}

impl Scalar {
    pub fn to_complex(self) -> Complex64 {
        match self {
            Scalar::Real(v) => Complex64::new(v, 0.0),
            Scalar::Complex(v) => v,
        }
    }
    pub fn re(self) -> f64 {
        match self {
            Scalar::Real(v) => v,
            Scalar::Complex(v) => v.re,
        }
    }
    pub fn im(self) -> f64 {
        match self {
            Scalar::Real(_) => 0.0,
            Scalar::Complex(v) => v.im,
        }
    }
    /// `true` for the `Real` variant; a `Complex` with zero imaginary part is still complex
    pub fn is_real(&self) -> bool {
        match self {
            Scalar::Real(_) => true,
            Scalar::Complex(_) => false,
        }
    }
    pub fn is_finite(self) -> bool {
        match self {
            Scalar::Real(v) => v.is_finite(),
            Scalar::Complex(v) => v.is_finite(),
        }
    }
    /// absolute value (modulus for complex values)
    pub fn norm(self) -> f64 {
        match self {
            Scalar::Real(v) => v.abs(),
            Scalar::Complex(v) => v.norm(),
        }
    }
    /// principal square root; negative reals produce a complex result
    pub fn sqrt(self) -> Scalar {
        match self {
            Scalar::Real(v) if v >= 0.0 => Scalar::Real(v.sqrt()),
            v => Scalar::Complex(v.to_complex().sqrt()),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Real(0.0)
    }
}

/// Compares numeric values, so `Real(2.0) == Complex(2 + 0i)`.
impl PartialEq for Scalar {
    fn eq(&self, rhs: &Scalar) -> bool {
        match (self, rhs) {
            (Scalar::Real(l), Scalar::Real(r)) => l == r,
            (l, r) => l.to_complex() == r.to_complex(),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Real(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Real(v.into())
    }
}

impl From<Complex64> for Scalar {
    fn from(v: Complex64) -> Self {
        Scalar::Complex(v)
    }
}

impl From<Scalar> for Complex64 {
    fn from(v: Scalar) -> Self {
        v.to_complex()
    }
}

macro_rules! impl_scalar_op {
    ($trait_name:ident, $fn_name:ident, $assign_trait_name:ident, $assign_fn_name:ident) => {
        impl $trait_name for Scalar {
            type Output = Scalar;
            fn $fn_name(self, rhs: Scalar) -> Scalar {
                match (self, rhs) {
                    (Scalar::Real(l), Scalar::Real(r)) => Scalar::Real(l.$fn_name(r)),
                    (l, r) => Scalar::Complex(l.to_complex().$fn_name(r.to_complex())),
                }
            }
        }

        impl<'a> $trait_name<&'a Scalar> for Scalar {
            type Output = Scalar;
            fn $fn_name(self, rhs: &Scalar) -> Scalar {
                self.$fn_name(*rhs)
            }
        }

        impl $assign_trait_name for Scalar {
            fn $assign_fn_name(&mut self, rhs: Scalar) {
                *self = (*self).$fn_name(rhs);
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign);
impl_scalar_op!(Div, div, DivAssign, div_assign);

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        match self {
            Scalar::Real(v) => Scalar::Real(-v),
            Scalar::Complex(v) => Scalar::Complex(-v),
        }
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Scalar::Real(0.0)
    }
    fn is_zero(&self) -> bool {
        match self {
            Scalar::Real(v) => v.is_zero(),
            Scalar::Complex(v) => v.is_zero(),
        }
    }
}

impl One for Scalar {
    fn one() -> Self {
        Scalar::Real(1.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Real(v) => write!(f, "{}", v),
            Scalar::Complex(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion() {
        let real = Scalar::from(3.0);
        let complex = Scalar::from(Complex64::new(1.0, 2.0));
        assert!((real + real).is_real());
        assert!((real * real).is_real());
        assert!(!(real + complex).is_real());
        assert_eq!(real * complex, Scalar::Complex(Complex64::new(3.0, 6.0)));
        assert_eq!(complex / complex, Scalar::Real(1.0));
        // complex results stay complex even when the imaginary part cancels
        let conjugate = Scalar::from(Complex64::new(1.0, -2.0));
        assert!(!(complex + conjugate).is_real());
        assert_eq!(complex + conjugate, Scalar::Real(2.0));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Scalar::from(16.0).sqrt(), Scalar::Real(4.0));
        let root = Scalar::from(-16.0).sqrt();
        assert!(!root.is_real());
        assert!(root.re().abs() < 1e-12);
        assert!((root.im() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::from(-2.5).to_string(), "-2.5");
        assert_eq!(Scalar::from(Complex64::new(1.0, -2.0)).to_string(), "1-2i");
    }
}
