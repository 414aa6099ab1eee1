// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::error::{Error, Result};
use crate::polynomial::{Polynomial, PolynomialCoefficient};
use log::trace;
use nalgebra::DMatrix;
use num_complex::Complex64;
use num_traits::Zero;

/// highest degree solved in closed form
pub const MAX_CLOSED_FORM_DEGREE: usize = 2;

/// Roots of a real polynomial as the eigenvalues of its companion matrix.
///
/// `coefficients` is highest degree first with a nonzero leading term.
fn companion_matrix_roots(coefficients: &[Complex64]) -> Result<Vec<Complex64>> {
    let degree = coefficients.len() - 1;
    if coefficients.iter().any(|v| !v.im.is_zero()) {
        return Err(Error::InvalidDegree {
            degree: Some(degree),
        });
    }
    let leading = coefficients[0].re;
    let monic: Vec<f64> = coefficients[1..].iter().map(|v| v.re / leading).collect();
    let companion = DMatrix::from_fn(degree, degree, |row, column| {
        if row == 0 {
            -monic[column]
        } else if row == column + 1 {
            1.0
        } else {
            0.0
        }
    });
    trace!("companion matrix for degree {}: {}", degree, companion);
    Ok(companion.complex_eigenvalues().iter().cloned().collect())
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// Finds every complex root, repeated roots once per multiplicity.
    ///
    /// Works in complex arithmetic throughout, so `x^2 + 4` yields `±2i`.
    /// Degree 1 gives `[-b / a]`, degree 2 gives
    /// `[(-b + sqrt(d)) / 2a, (-b - sqrt(d)) / 2a]`; leading zero
    /// coefficients are dropped first, so a zero `a` degenerates to the
    /// lower degree. Real polynomials above degree 2 are solved through the
    /// companion matrix. Fails with [`Error::InvalidDegree`] for the zero
    /// polynomial and for non-real polynomials above degree 2.
    pub fn roots(&self) -> Result<Vec<Complex64>> {
        let canonical = self.canonicalize();
        if canonical.is_zero() {
            return Err(Error::InvalidDegree { degree: None });
        }
        let degree = canonical.order();
        let coefficients: Vec<Complex64> = canonical
            .iter()
            .map(PolynomialCoefficient::to_complex)
            .collect();
        if !coefficients.iter().all(|v| v.is_finite()) {
            return Err(Error::InvalidDegree {
                degree: Some(degree),
            });
        }
        let roots = match *coefficients.as_slice() {
            [_] => Vec::new(),
            [a, b] => vec![-b / a],
            [a, b, c] => {
                let discriminant_sqrt = (b * b - a * c * 4.0).sqrt();
                let two_a = a * 2.0;
                vec![(-b + discriminant_sqrt) / two_a, (-b - discriminant_sqrt) / two_a]
            }
            _ => companion_matrix_roots(&coefficients)?,
        };
        if roots.iter().all(|v| v.is_finite()) {
            Ok(roots)
        } else {
            Err(Error::InvalidDegree {
                degree: Some(degree),
            })
        }
    }
}
