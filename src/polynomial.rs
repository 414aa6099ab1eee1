// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::traits::PolynomialEval;
use crate::util::Sign;
use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::Ratio;
use num_traits::{One, ToPrimitive, Zero};
use std::convert::TryFrom;
use std::fmt;
use std::iter;
use std::ops::{Add, Mul, Neg, Sub};
use std::slice;
use std::vec;

mod add_sub;
mod div_rem;
mod mul;
mod roots;
mod spectral_div;

pub use self::div_rem::PolynomialDivSupported;
pub use self::roots::MAX_CLOSED_FORM_DEGREE;
pub use self::spectral_div::{
    find_quotient_alignment, SpectralDivision, SpectralDivisionOptions, DEFAULT_DIGITS,
    DEFAULT_MIN_BIN_MAGNITUDE,
};

/// Values usable as polynomial coefficients.
pub trait PolynomialCoefficient:
    Clone
    + fmt::Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// sign used when rendering; `None` for zero and for values without a
    /// real ordering, which are rendered whole
    fn sign(&self) -> Option<Sign>;
    /// lossy conversion used by the spectral divider and the root finder
    fn to_complex(&self) -> Complex64;
    /// `false` for infinite and NaN components; exact values are always finite
    fn is_finite(&self) -> bool;
}

impl PolynomialCoefficient for f64 {
    fn sign(&self) -> Option<Sign> {
        Sign::new(self)
    }
    fn to_complex(&self) -> Complex64 {
        Complex64::new(*self, 0.0)
    }
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl PolynomialCoefficient for Complex64 {
    fn sign(&self) -> Option<Sign> {
        None
    }
    fn to_complex(&self) -> Complex64 {
        *self
    }
    fn is_finite(&self) -> bool {
        Complex64::is_finite(*self)
    }
}

impl PolynomialCoefficient for Scalar {
    fn sign(&self) -> Option<Sign> {
        match self {
            Scalar::Real(v) => Sign::new(v),
            Scalar::Complex(_) => None,
        }
    }
    fn to_complex(&self) -> Complex64 {
        Scalar::to_complex(*self)
    }
    fn is_finite(&self) -> bool {
        Scalar::is_finite(*self)
    }
}

macro_rules! impl_rational_coefficient {
    ($t:ty) => {
        impl PolynomialCoefficient for Ratio<$t> {
            fn sign(&self) -> Option<Sign> {
                Sign::new(self)
            }
            fn to_complex(&self) -> Complex64 {
                Complex64::new(self.to_f64().unwrap_or(f64::NAN), 0.0)
            }
            fn is_finite(&self) -> bool {
                true
            }
        }
    };
}

impl_rational_coefficient!(i64);
impl_rational_coefficient!(BigInt);

/// A single-variable polynomial.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, self.order() - n)`,
/// so the highest-degree coefficient comes first and the constant term last.
///
/// # Invariants
///
/// `self.coefficients()` is never empty. Leading zero coefficients are kept
/// as given, use [`Polynomial::canonicalize`] to strip them.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T> Polynomial<T> {
    pub fn new(coefficients: Vec<T>) -> Result<Self> {
        if coefficients.is_empty() {
            Err(Error::InvalidPolynomial)
        } else {
            Ok(Self { coefficients })
        }
    }
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<T> {
        self.coefficients.iter()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    /// `len() - 1`; counts leading zero coefficients
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }
    pub fn leading_coefficient(&self) -> &T {
        &self.coefficients[0]
    }
    pub fn constant_term(&self) -> &T {
        &self.coefficients[self.coefficients.len() - 1]
    }
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// strips leading zero coefficients; an all-zero polynomial becomes `[0]`
    pub fn canonicalize(&self) -> Self {
        match self.iter().position(|v| !v.is_zero()) {
            Some(first_nonzero) => Self {
                coefficients: self.coefficients[first_nonzero..].to_vec(),
            },
            None => Zero::zero(),
        }
    }
    /// the order ignoring leading zero coefficients
    pub fn degree(&self) -> usize {
        self.canonicalize().order()
    }
    /// Evaluates with Horner's method, starting from the highest-degree
    /// coefficient. `x` may be any type the coefficients convert into, so a
    /// real polynomial can be evaluated at a complex point.
    pub fn evaluate<X>(&self, x: X) -> X
    where
        X: From<T> + Clone + Add<Output = X> + Mul<Output = X>,
    {
        let (first, rest) = match self.coefficients.split_first() {
            Some(v) => v,
            None => unreachable!("polynomials always hold a coefficient"),
        };
        rest.iter().fold(X::from(first.clone()), |acc, coefficient| {
            acc * x.clone() + X::from(coefficient.clone())
        })
    }
    /// largest modulus of the coefficient-wise difference, aligned on the constant term
    pub fn max_abs_difference(&self, other: &Self) -> f64 {
        let len = self.len().max(other.len());
        let padded = |p: &Self| -> Vec<Complex64> {
            iter::repeat(Complex64::zero())
                .take(len - p.len())
                .chain(p.iter().map(PolynomialCoefficient::to_complex))
                .collect()
        };
        padded(self)
            .iter()
            .zip(padded(other))
            .map(|(l, r)| (l - r).norm())
            .fold(0.0, f64::max)
    }
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.max_abs_difference(other) <= tolerance
    }
}

impl<T> TryFrom<Vec<T>> for Polynomial<T> {
    type Error = Error;
    fn try_from(coefficients: Vec<T>) -> Result<Self> {
        Self::new(coefficients)
    }
}

impl<T: PolynomialCoefficient> Zero for Polynomial<T> {
    /// the explicit zero polynomial `[0]`
    fn zero() -> Self {
        Self {
            coefficients: vec![T::zero()],
        }
    }
    /// `true` when every coefficient is zero, whatever the length
    fn is_zero(&self) -> bool {
        self.iter().all(Zero::is_zero)
    }
}

impl<T, X> PolynomialEval<X> for &'_ Polynomial<T>
where
    T: PolynomialCoefficient,
    X: From<T> + Clone + Add<Output = X> + Mul<Output = X>,
{
    fn eval(self, x: &X) -> X {
        self.evaluate(x.clone())
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn write_term<T: fmt::Display>(f: &mut fmt::Formatter, coefficient: &T, power: usize) -> fmt::Result {
    match power {
        0 => write!(f, "{}", coefficient),
        1 => write!(f, "{} * x", coefficient),
        _ => write!(f, "{} * x^{}", coefficient, power),
    }
}

/// Renders terms from the highest degree down, omitting zero terms, e.g.
/// `3 * x^2 - 2 * x + 1`. Coefficients without an ordering are parenthesised.
impl<T: PolynomialCoefficient + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let order = self.order();
        let mut first = true;
        for (index, coefficient) in self.iter().enumerate() {
            if coefficient.is_zero() {
                continue;
            }
            let power = order - index;
            match (coefficient.sign(), first) {
                (Some(Sign::Negative), true) => {
                    write!(f, "-")?;
                    write_term(f, &-coefficient.clone(), power)?;
                }
                (Some(Sign::Negative), false) => {
                    write!(f, "{}", Sign::Negative.separator())?;
                    write_term(f, &-coefficient.clone(), power)?;
                }
                (Some(Sign::Positive), _) => {
                    if !first {
                        write!(f, "{}", Sign::Positive.separator())?;
                    }
                    write_term(f, coefficient, power)?;
                }
                (None, _) => {
                    if !first {
                        write!(f, "{}", Sign::Positive.separator())?;
                    }
                    write_term(f, &format!("({})", coefficient), power)?;
                }
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
