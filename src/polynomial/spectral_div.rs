// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Approximate division by deconvolution in the frequency domain.
//!
//! Both operands are zero-padded to a candidate length, transformed,
//! divided bin by bin and transformed back. Padding lengths whose divisor
//! spectrum has a near-zero bin are rejected and the next candidate is
//! tried.
//!
//! Where the quotient lands inside the padded buffer depends on the
//! padding length and on how the padding is distributed. There is no
//! closed-form rule for it here: callers either force the offsets or
//! search for them with [`find_quotient_alignment`].

use crate::alignment::{rotate_left, round, zero_pad, Alignment, RoundDigits};
use crate::error::{Error, Result};
use crate::fft::{fft, ifft};
use crate::polynomial::{Polynomial, PolynomialCoefficient};
use log::debug;
use num_complex::Complex64;
use std::ops::RangeInclusive;

pub const DEFAULT_DIGITS: u32 = 6;
pub const DEFAULT_MIN_BIN_MAGNITUDE: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
pub struct SpectralDivisionOptions {
    /// candidate buffer lengths, tried smallest first; defaults to
    /// `dividend.len()..=2 * dividend.len()`
    pub pad_range: Option<RangeInclusive<usize>>,
    /// `(self_offset, other_offset)`: left rotations of the padded dividend
    /// and divisor buffers; defaults to `(0, 0)`
    pub offsets: Option<(isize, isize)>,
    pub alignment: Alignment,
    /// decimal places the quotient buffer is rounded to
    pub digits: u32,
    /// divisor bins with a smaller modulus reject the candidate padding
    pub min_bin_magnitude: f64,
    /// keep the pre-crop buffer in the result
    pub details: bool,
}

impl Default for SpectralDivisionOptions {
    fn default() -> Self {
        Self {
            pad_range: None,
            offsets: None,
            alignment: Alignment::End,
            digits: DEFAULT_DIGITS,
            min_bin_magnitude: DEFAULT_MIN_BIN_MAGNITUDE,
            details: false,
        }
    }
}

impl SpectralDivisionOptions {
    pub fn with_pad_range(mut self, pad_range: RangeInclusive<usize>) -> Self {
        self.pad_range = Some(pad_range);
        self
    }
    pub fn with_offsets(mut self, self_offset: isize, other_offset: isize) -> Self {
        self.offsets = Some((self_offset, other_offset));
        self
    }
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }
    pub fn with_min_bin_magnitude(mut self, min_bin_magnitude: f64) -> Self {
        self.min_bin_magnitude = min_bin_magnitude;
        self
    }
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }
}

/// The outcome of one spectral division; never mutated after it is built.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralDivision {
    /// `order(dividend) - order(divisor) + 1` coefficients, highest degree first
    pub quotient: Vec<f64>,
    pub padding: usize,
    pub self_offset: isize,
    pub other_offset: isize,
    /// the rounded real quotient buffer before rotation and cropping,
    /// only kept when `details` was requested
    pub buffer: Option<Vec<f64>>,
}

fn to_complex_buffer<T: PolynomialCoefficient>(polynomial: &Polynomial<T>) -> Vec<Complex64> {
    polynomial.iter().map(PolynomialCoefficient::to_complex).collect()
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// Approximates `self / divisor` by deconvolution.
    ///
    /// Leading zero coefficients of both operands are ignored. Fails with
    /// [`Error::LengthMismatch`] when the dividend's degree is below the
    /// divisor's, and with [`Error::DegenerateSpectrum`] when no padding in
    /// the range gives a usable divisor spectrum. A padding whose inverse
    /// transform overflows to infinity or NaN is rejected like a near-zero bin.
    ///
    /// Only the real part of the inverse transform is kept, so the quotient of
    /// operands with non-real coefficients loses its imaginary part. Use
    /// [`Polynomial::div_rem`] for complex division.
    pub fn spectral_div(
        &self,
        divisor: &Self,
        options: &SpectralDivisionOptions,
    ) -> Result<SpectralDivision> {
        let dividend = self.canonicalize();
        let divisor = divisor.canonicalize();
        if dividend.order() < divisor.order() {
            return Err(Error::LengthMismatch {
                length: divisor.len(),
                target: dividend.len(),
            });
        }
        let quotient_len = dividend.order() - divisor.order() + 1;
        let pad_range = options
            .pad_range
            .clone()
            .unwrap_or(dividend.len()..=2 * dividend.len());
        let (self_offset, other_offset) = options.offsets.unwrap_or((0, 0));
        let dividend = to_complex_buffer(&dividend);
        let divisor = to_complex_buffer(&divisor);
        for padding in pad_range.clone() {
            if padding < dividend.len() {
                debug!(
                    "skipping padding {}: shorter than the {} dividend coefficients",
                    padding,
                    dividend.len()
                );
                continue;
            }
            let divisor_spectrum = fft(&zero_pad(&divisor, padding, options.alignment)?);
            if let Some(bin) = divisor_spectrum
                .iter()
                .position(|v| !(v.norm() >= options.min_bin_magnitude))
            {
                debug!(
                    "rejecting padding {}: divisor bin {} is below {}",
                    padding, bin, options.min_bin_magnitude
                );
                continue;
            }
            let dividend_spectrum = fft(&zero_pad(&dividend, padding, options.alignment)?);
            let quotient_spectrum: Vec<Complex64> = dividend_spectrum
                .iter()
                .zip(&divisor_spectrum)
                .map(|(l, r)| l / r)
                .collect();
            let raw = ifft(&quotient_spectrum);
            if !raw.iter().all(|v| v.is_finite()) {
                debug!("rejecting padding {}: non-finite quotient", padding);
                continue;
            }
            let buffer: Vec<f64> = raw.iter().map(|v| v.re.round_digits(options.digits)).collect();
            let mut quotient = rotate_left(&buffer, self_offset.wrapping_sub(other_offset));
            quotient.truncate(quotient_len);
            debug!(
                "spectral division used padding {} with offsets ({}, {})",
                padding, self_offset, other_offset
            );
            return Ok(SpectralDivision {
                quotient,
                padding,
                self_offset,
                other_offset,
                buffer: if options.details { Some(buffer) } else { None },
            });
        }
        Err(Error::DegenerateSpectrum {
            min: *pad_range.start(),
            max: *pad_range.end(),
        })
    }
}

/// Searches for a padding, self offset and output rotation that make the
/// spectral quotient of `dividend / divisor` equal `expected` after rounding.
///
/// Paddings are tried in ascending order, then self offsets `0..padding`,
/// then rotations of the cropped quotient. Returns the matching division
/// and the rotation that aligns it, or `None` when nothing in the range
/// matches. Paddings with a degenerate spectrum are skipped.
pub fn find_quotient_alignment<T: PolynomialCoefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
    expected: &[f64],
    pad_range: RangeInclusive<usize>,
    alignment: Alignment,
    digits: u32,
) -> Result<Option<(SpectralDivision, isize)>> {
    let expected = round(expected, digits);
    for padding in pad_range {
        for self_offset in 0..padding as isize {
            let options = SpectralDivisionOptions::default()
                .with_pad_range(padding..=padding)
                .with_offsets(self_offset, 0)
                .with_alignment(alignment)
                .with_digits(digits)
                .with_details(true);
            let division = match dividend.spectral_div(divisor, &options) {
                Ok(division) => division,
                Err(Error::DegenerateSpectrum { .. }) => break,
                Err(err) => return Err(err),
            };
            if division.quotient.len() != expected.len() {
                continue;
            }
            for rotation in 0..division.quotient.len() as isize {
                if rotate_left(&division.quotient, rotation) == expected {
                    debug!(
                        "quotient aligned with padding {}, self offset {}, rotation {}",
                        padding, self_offset, rotation
                    );
                    return Ok(Some((division, rotation)));
                }
            }
        }
    }
    Ok(None)
}
