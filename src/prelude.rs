// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    alignment::{Alignment, AlignmentSpec, RoundDigits as _},
    polynomial::{Polynomial, PolynomialCoefficient, SpectralDivisionOptions},
    scalar::Scalar,
    traits::PolynomialEval as _,
};
pub use num_traits::{CheckedDiv as _, CheckedRem as _, One as _, Zero as _};
