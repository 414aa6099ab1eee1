// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Error types for polykit

use thiserror::Error;

/// Result type alias using polykit's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in polynomial operations
///
/// Every failure is raised where it is detected; nothing is retried
/// internally. No operation returns NaN or infinite components in place
/// of one of these errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A polynomial was constructed from an empty coefficient sequence
    #[error("invalid polynomial: coefficient sequence is empty")]
    InvalidPolynomial,

    /// Exact division by a polynomial whose coefficients are all zero
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// No padding length in the searched range avoided a near-zero divisor bin
    #[error("degenerate spectrum: no padding in {min}..={max} avoids a near-zero divisor bin")]
    DegenerateSpectrum {
        /// Smallest padding length searched
        min: usize,
        /// Largest padding length searched
        max: usize,
    },

    /// Root finding on the zero polynomial or on an unsupported degree
    #[error("invalid degree for root finding: {}", display_degree(.degree))]
    InvalidDegree {
        /// Degree of the rejected polynomial, `None` for the zero polynomial
        degree: Option<usize>,
    },

    /// Exact division overflowed, or was fed, an infinite or NaN coefficient
    #[error("non-finite result: a coefficient overflowed to infinity or NaN")]
    NonFiniteResult,

    /// A sequence of `length` elements cannot be reconciled with `target`
    #[error("length mismatch: cannot fit {length} elements into {target}")]
    LengthMismatch {
        /// Length of the input sequence
        length: usize,
        /// Requested length
        target: usize,
    },
}

fn display_degree(degree: &Option<usize>) -> String {
    match degree {
        Some(degree) => degree.to_string(),
        None => "zero polynomial".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidDegree { degree: Some(7) }.to_string(),
            "invalid degree for root finding: 7"
        );
        assert_eq!(
            Error::InvalidDegree { degree: None }.to_string(),
            "invalid degree for root finding: zero polynomial"
        );
        assert_eq!(
            Error::LengthMismatch {
                length: 3,
                target: 2
            }
            .to_string(),
            "length mismatch: cannot fit 3 elements into 2"
        );
        assert_eq!(
            Error::NonFiniteResult.to_string(),
            "non-finite result: a coefficient overflowed to infinity or NaN"
        );
    }
}
