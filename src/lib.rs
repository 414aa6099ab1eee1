// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Numeric polynomials with exact (long) division, approximate
//! frequency-domain division and closed-form root extraction.

pub mod alignment;
pub mod error;
pub mod fft;
pub mod polynomial;
pub mod prelude;
pub mod scalar;
pub mod traits;
pub mod util;

pub use crate::error::{Error, Result};
pub use crate::polynomial::{Polynomial, PolynomialCoefficient};
pub use crate::scalar::Scalar;
