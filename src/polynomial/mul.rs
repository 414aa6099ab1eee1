// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{Polynomial, PolynomialCoefficient};
use num_traits::{One, Zero};
use std::{
    mem,
    ops::{Mul, MulAssign},
};

/// Full discrete convolution; the result always has
/// `self.len() + rhs.len() - 1` coefficients, nothing is stripped.
impl<'a, T: PolynomialCoefficient> Mul for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        let mut coefficients = vec![T::zero(); self.len() + rhs.len() - 1];
        for (l_index, l) in self.iter().enumerate() {
            if l.is_zero() {
                continue;
            }
            for (r_index, r) in rhs.iter().enumerate() {
                let element = &mut coefficients[l_index + r_index];
                let sum = mem::replace(element, T::zero());
                *element = sum + l.clone() * r.clone();
            }
        }
        Polynomial { coefficients }
    }
}

impl<'a, T: PolynomialCoefficient> Mul<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

impl<'a, T: PolynomialCoefficient> Mul<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: PolynomialCoefficient> Mul for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: PolynomialCoefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<'a, T: PolynomialCoefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// multiplies every coefficient by `factor`
    pub fn scale(&self, factor: &T) -> Polynomial<T> {
        Polynomial {
            coefficients: self
                .iter()
                .map(|v| v.clone() * factor.clone())
                .collect(),
        }
    }
}

impl<'a, T: PolynomialCoefficient> Mul<&'a T> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &T) -> Polynomial<T> {
        self.scale(rhs)
    }
}

impl<'a, T: PolynomialCoefficient> Mul<T> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: T) -> Polynomial<T> {
        self.scale(&rhs)
    }
}

impl<'a, T: PolynomialCoefficient> Mul<&'a T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &T) -> Polynomial<T> {
        self.scale(rhs)
    }
}

impl<T: PolynomialCoefficient> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: T) -> Polynomial<T> {
        self.scale(&rhs)
    }
}

impl<'a, T: PolynomialCoefficient> MulAssign<&'a T> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &T) {
        *self = self.scale(rhs);
    }
}

impl<T: PolynomialCoefficient> One for Polynomial<T> {
    fn one() -> Self {
        Self {
            coefficients: vec![One::one()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::tests::poly;
    use crate::util::tests::test_op_helper;
    use num_rational::Ratio;

    #[test]
    fn test_mul() {
        let test = |l: Polynomial<f64>, r: Polynomial<f64>, expected: &Polynomial<f64>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l *= r,
                |l, r| *l *= r,
                |l, r| l * r,
                |l, r| l * r,
                |l, r| l * r,
                |l, r| l * r,
            );
        };
        test(
            poly(&[12.0, 11.0, 10.0]),
            poly(&[1.0, 2.0, 3.0, -11.0, 10.0]),
            &poly(&[12.0, 35.0, 68.0, -79.0, 29.0, 0.0, 100.0]),
        );
        test(
            poly(&[-33.0, -97.0, -65.0]),
            poly(&[1.0, 2.0]),
            &poly(&[-33.0, -163.0, -259.0, -130.0]),
        );
        // zero coefficients still contribute to the length
        test(
            poly(&[0.0, 1.0]),
            poly(&[0.0, 0.0, 1.0]),
            &poly(&[0.0, 0.0, 0.0, 1.0]),
        );
    }

    #[test]
    fn test_mul_rational() {
        let r = |n: i64, d: i64| Ratio::new(n, d);
        let l = Polynomial::new(vec![r(12, 7), r(11, 7), r(10, 7)]).unwrap();
        let rhs = Polynomial::new(vec![r(1, 29), r(2, 29), r(3, 29), r(-11, 29), r(10, 29)]).unwrap();
        let expected = Polynomial::new(vec![
            r(12, 203),
            r(5, 29),
            r(68, 203),
            r(-79, 203),
            r(1, 7),
            r(0, 1),
            r(100, 203),
        ])
        .unwrap();
        assert_eq!(&l * &rhs, expected);
    }

    #[test]
    fn test_scale_and_one() {
        assert_eq!(poly(&[1.0, -2.0]).scale(&3.0), poly(&[3.0, -6.0]));
        assert_eq!(&poly(&[1.0, -2.0]) * &-0.5, poly(&[-0.5, 1.0]));
        assert_eq!(poly(&[1.0, -2.0]) * 2.0, poly(&[2.0, -4.0]));
        let mut p = poly(&[1.0, 1.0]);
        p *= &4.0;
        assert_eq!(p, poly(&[4.0, 4.0]));
        let p = poly(&[4.0, 5.0]);
        assert_eq!(&p * &Polynomial::one(), p);
    }
}
