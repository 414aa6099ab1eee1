// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Polynomial long division.
//!
//! With exact coefficients (`Ratio<i64>`, `BigRational`) the result is
//! exact. With floating coefficients every elimination step rounds, and
//! the error grows roughly linearly in the number of steps,
//! `order(dividend) - order(divisor) + 1`.

use crate::error::{Error, Result};
use crate::polynomial::{Polynomial, PolynomialCoefficient};
use log::trace;
use num_traits::{CheckedDiv, CheckedRem, Zero};
use std::{
    borrow::Borrow,
    mem,
    ops::{Div, Rem},
};

/// Coefficients that can be divided, as needed by long division.
pub trait PolynomialDivSupported: PolynomialCoefficient + Div<Output = Self> {}

impl<T: PolynomialCoefficient + Div<Output = T>> PolynomialDivSupported for T {}

fn quotient_len(numerator_len: usize, denominator_len: usize) -> Option<usize> {
    debug_assert_ne!(denominator_len, 0);
    if numerator_len < denominator_len {
        None
    } else {
        Some(1 + numerator_len - denominator_len)
    }
}

impl<T: PolynomialDivSupported> Polynomial<T> {
    /// Returns `(quotient, remainder)` with `self = quotient * divisor + remainder`.
    ///
    /// The remainder has `divisor.degree()` coefficients (the zero polynomial
    /// for a constant divisor), so its order is always below the divisor's.
    /// Leading zeros of `divisor` are ignored; an all-zero divisor fails with
    /// [`Error::DivisionByZero`]. A quotient or remainder with an infinite or
    /// NaN coefficient, e.g. from a tiny leading divisor coefficient,
    /// fails with [`Error::NonFiniteResult`].
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let divisor = divisor.canonicalize();
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (quotient, remainder) = match quotient_len(self.len(), divisor.len()) {
            None => (Zero::zero(), self.canonicalize()),
            Some(quotient_len) => self.long_division(&divisor, quotient_len),
        };
        if quotient
            .iter()
            .chain(remainder.iter())
            .all(PolynomialCoefficient::is_finite)
        {
            Ok((quotient, remainder))
        } else {
            Err(Error::NonFiniteResult)
        }
    }

    /// `divisor` must be canonical and nonzero
    fn long_division(&self, divisor: &Self, quotient_len: usize) -> (Self, Self) {
        trace!("long division: {} elimination steps", quotient_len);
        let divisor_leading = divisor.leading_coefficient();
        let mut remainder = self.coefficients.clone();
        let mut quotient = Vec::with_capacity(quotient_len);
        for step in 0..quotient_len {
            let factor = mem::replace(&mut remainder[step], T::zero()) / divisor_leading.clone();
            for (offset, divisor_element) in divisor.iter().enumerate().skip(1) {
                let element = &mut remainder[step + offset];
                let value = mem::replace(element, T::zero());
                *element = value - factor.clone() * divisor_element.clone();
            }
            quotient.push(factor);
        }
        let remainder = remainder.split_off(quotient_len);
        let remainder = if remainder.is_empty() {
            Zero::zero()
        } else {
            Polynomial {
                coefficients: remainder,
            }
        };
        (
            Polynomial {
                coefficients: quotient,
            },
            remainder,
        )
    }
}

impl<T: PolynomialDivSupported> CheckedDiv for Polynomial<T> {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.div_rem(rhs).ok().map(|(quotient, _)| quotient)
    }
}

impl<T: PolynomialDivSupported> CheckedRem for Polynomial<T> {
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        self.div_rem(rhs).ok().map(|(_, remainder)| remainder)
    }
}

macro_rules! impl_div_rem {
    ($($lifetime:lifetime),*; $l:ty, $r:ty) => {
        /// # Panics
        ///
        /// Panics if `rhs` is the zero polynomial, like integer division, or
        /// if [`Polynomial::div_rem`] produces a non-finite coefficient.
        impl<$($lifetime,)* T: PolynomialDivSupported> Div<$r> for $l {
            type Output = Polynomial<T>;
            fn div(self, rhs: $r) -> Polynomial<T> {
                let lhs: &Polynomial<T> = self.borrow();
                lhs.div_rem(rhs.borrow())
                    .unwrap_or_else(|err| panic!("{}", err))
                    .0
            }
        }

        /// # Panics
        ///
        /// Panics if `rhs` is the zero polynomial, like integer remainder, or
        /// if [`Polynomial::div_rem`] produces a non-finite coefficient.
        impl<$($lifetime,)* T: PolynomialDivSupported> Rem<$r> for $l {
            type Output = Polynomial<T>;
            fn rem(self, rhs: $r) -> Polynomial<T> {
                let lhs: &Polynomial<T> = self.borrow();
                lhs.div_rem(rhs.borrow())
                    .unwrap_or_else(|err| panic!("{}", err))
                    .1
            }
        }
    };
}

impl_div_rem!(; Polynomial<T>, Polynomial<T>);
impl_div_rem!('a; Polynomial<T>, &'a Polynomial<T>);
impl_div_rem!('a; &'a Polynomial<T>, Polynomial<T>);
impl_div_rem!('a, 'b; &'a Polynomial<T>, &'b Polynomial<T>);
