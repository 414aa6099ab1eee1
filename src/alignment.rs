// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Helpers for preparing equal-length buffers and comparing numeric
//! sequences under tolerance.

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use num_complex::Complex64;
use num_integer::Integer;
use num_traits::Zero;
use std::iter;

/// Where zero elements are inserted when padding a sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// zeros go after the input
    End,
    /// zeros go before the input
    Start,
    /// `floor(extra / 2)` zeros before the input, the rest after it
    Split,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::End
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AlignmentSpec {
    pub length: usize,
    pub alignment: Alignment,
}

impl AlignmentSpec {
    pub fn new(length: usize, alignment: Alignment) -> Self {
        Self { length, alignment }
    }
    pub fn apply<T: Clone + Zero>(&self, values: &[T]) -> Result<Vec<T>> {
        zero_pad(values, self.length, self.alignment)
    }
}

/// Extends `values` to `target` elements by inserting zeros.
pub fn zero_pad<T: Clone + Zero>(values: &[T], target: usize, alignment: Alignment) -> Result<Vec<T>> {
    if target < values.len() {
        return Err(Error::LengthMismatch {
            length: values.len(),
            target,
        });
    }
    let extra = target - values.len();
    let before = match alignment {
        Alignment::End => 0,
        Alignment::Start => extra,
        Alignment::Split => extra / 2,
    };
    let after = extra - before;
    let mut retval = Vec::with_capacity(target);
    retval.extend(iter::repeat_with(T::zero).take(before));
    retval.extend_from_slice(values);
    retval.extend(iter::repeat_with(T::zero).take(after));
    Ok(retval)
}

/// Circular shift towards lower indices; `amount` is taken modulo the length.
pub fn rotate_left<T: Clone>(values: &[T], amount: isize) -> Vec<T> {
    if values.is_empty() {
        return Vec::new();
    }
    let len = values.len() as isize;
    let mid = amount.mod_floor(&len) as usize;
    let mut retval = values.to_vec();
    retval.rotate_left(mid);
    retval
}

/// Circular shift towards higher indices; `amount` is taken modulo the length.
pub fn rotate_right<T: Clone>(values: &[T], amount: isize) -> Vec<T> {
    rotate_left(values, amount.wrapping_neg())
}

/// Rounding to a fixed number of decimal places.
///
/// Complex values round their real and imaginary parts independently.
pub trait RoundDigits {
    fn round_digits(&self, digits: u32) -> Self;
}

impl RoundDigits for f64 {
    fn round_digits(&self, digits: u32) -> f64 {
        let scale = 10f64.powi(digits as i32);
        let scaled = self * scale;
        if scaled.is_finite() {
            scaled.round() / scale
        } else {
            *self
        }
    }
}

impl RoundDigits for Complex64 {
    fn round_digits(&self, digits: u32) -> Complex64 {
        Complex64::new(self.re.round_digits(digits), self.im.round_digits(digits))
    }
}

impl RoundDigits for Scalar {
    fn round_digits(&self, digits: u32) -> Scalar {
        match self {
            Scalar::Real(v) => Scalar::Real(v.round_digits(digits)),
            Scalar::Complex(v) => Scalar::Complex(v.round_digits(digits)),
        }
    }
}

impl<T: RoundDigits> RoundDigits for Vec<T> {
    fn round_digits(&self, digits: u32) -> Vec<T> {
        round(self, digits)
    }
}

pub fn round<T: RoundDigits>(values: &[T], digits: u32) -> Vec<T> {
    values.iter().map(|v| v.round_digits(digits)).collect()
}

/// Converts to real values when every imaginary part is within `tolerance`
/// of zero, otherwise keeps every element complex.
///
/// For display only; arithmetic should keep working on the complex values.
pub fn narrow_if_real(values: &[Complex64], tolerance: f64) -> Vec<Scalar> {
    if values.iter().all(|v| v.im.abs() <= tolerance) {
        values.iter().map(|v| Scalar::Real(v.re)).collect()
    } else {
        values.iter().map(|v| Scalar::Complex(*v)).collect()
    }
}

/// `true` when both sequences have the same length and every pair of
/// elements differs by at most `tolerance`.
pub fn close_abs(lhs: &[f64], rhs: &[f64], tolerance: f64) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs)
            .all(|(l, r)| (l - r).abs() <= tolerance)
}

/// `true` when both sequences have the same length and every pair of
/// elements agrees in its leading `figures` significant digits.
pub fn close_sig_figs(lhs: &[f64], rhs: &[f64], figures: u32) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs)
            .all(|(&l, &r)| same_sig_figs(l, r, figures))
}

fn same_sig_figs(lhs: f64, rhs: f64, figures: u32) -> bool {
    if lhs == rhs {
        return true;
    }
    let magnitude = lhs.abs().max(rhs.abs());
    if !magnitude.is_finite() {
        return false;
    }
    let exponent = figures as i32 - 1 - magnitude.log10().floor() as i32;
    let scale = 10f64.powi(exponent);
    (lhs * scale).round() == (rhs * scale).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_pad() {
        assert_eq!(
            zero_pad(&[1, 2, 3], 5, Alignment::End),
            Ok(vec![1, 2, 3, 0, 0])
        );
        assert_eq!(
            zero_pad(&[1, 2, 3], 5, Alignment::Start),
            Ok(vec![0, 0, 1, 2, 3])
        );
        assert_eq!(
            zero_pad(&[1, 2, 3], 6, Alignment::Split),
            Ok(vec![0, 1, 2, 3, 0, 0])
        );
        assert_eq!(zero_pad(&[1, 2, 3], 3, Alignment::Split), Ok(vec![1, 2, 3]));
        assert_eq!(
            zero_pad(&[1, 2, 3], 2, Alignment::End),
            Err(Error::LengthMismatch {
                length: 3,
                target: 2
            })
        );
        assert_eq!(
            AlignmentSpec::new(4, Alignment::Start).apply(&[1.5]),
            Ok(vec![0.0, 0.0, 0.0, 1.5])
        );
    }

    #[test]
    fn test_rotate() {
        assert_eq!(rotate_left(&[1, 2, 3, 4], 1), vec![2, 3, 4, 1]);
        assert_eq!(rotate_right(&[1, 2, 3, 4], 1), vec![4, 1, 2, 3]);
        assert_eq!(rotate_left(&[1, 2, 3, 4], 5), vec![2, 3, 4, 1]);
        assert_eq!(rotate_left(&[1, 2, 3, 4], -1), vec![4, 1, 2, 3]);
        assert_eq!(rotate_right(&[1, 2, 3, 4], -6), vec![3, 4, 1, 2]);
        assert_eq!(rotate_left::<i32>(&[], 3), Vec::<i32>::new());
    }

    #[test]
    fn test_round() {
        assert_eq!(
            Complex64::new(2.0, 0.0000004).round_digits(6),
            Complex64::new(2.0, 0.0)
        );
        assert_eq!(1.23456789.round_digits(3), 1.235);
        assert_eq!(round(&[-32.9999999999, 0.1234564], 6), vec![-33.0, 0.123456]);
        assert_eq!(f64::INFINITY.round_digits(6), f64::INFINITY);
        assert_eq!(
            Scalar::from(Complex64::new(0.5000001, -1.0)).round_digits(2),
            Scalar::from(Complex64::new(0.5, -1.0))
        );
    }

    #[test]
    fn test_narrow_if_real() {
        let narrowed = narrow_if_real(&[Complex64::new(1.0, 1e-12), Complex64::new(2.0, 0.0)], 1e-9);
        assert_eq!(narrowed, vec![Scalar::Real(1.0), Scalar::Real(2.0)]);
        assert!(narrowed.iter().all(Scalar::is_real));
        let kept = narrow_if_real(&[Complex64::new(1.0, 0.5), Complex64::new(2.0, 0.0)], 1e-9);
        assert!(kept.iter().all(|v| !v.is_real()));
    }

    #[test]
    fn test_close() {
        assert!(close_abs(&[1.0, 2.0], &[1.0000001, 1.9999999], 1e-6));
        assert!(!close_abs(&[1.0, 2.0], &[1.0, 2.1], 1e-6));
        assert!(!close_abs(&[1.0], &[1.0, 2.0], 1e-6));
        assert!(close_sig_figs(&[123456.0, 0.0012341], &[123457.0, 0.0012344], 4));
        assert!(!close_sig_figs(&[123456.0], &[124456.0], 4));
        assert!(close_sig_figs(&[0.0], &[0.0], 6));
    }

    proptest! {
        #[test]
        fn round_is_idempotent(x in -1.0e4f64..1.0e4, digits in 0u32..=8) {
            let once = x.round_digits(digits);
            prop_assert_eq!(once.round_digits(digits), once);
        }

        #[test]
        fn rotations_cancel(values in prop::collection::vec(-100i32..100, 0..12), amount in -20isize..20) {
            prop_assert_eq!(rotate_right(&rotate_left(&values, amount), amount), values);
        }
    }
}
