// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Discrete Fourier transforms over `Complex64` buffers.
//!
//! Power-of-two lengths use a radix-2 Stockham autosort kernel, every
//! other length falls back to the direct `O(n^2)` sum. Padding lengths
//! used by spectral division are small and arbitrary, so both paths are
//! needed.
//!
//! ```text
//! For each stage s = 0..log2(N):
//!     half_m = 2^s
//!     m = 2^(s+1)
//!     For each group g = 0..(N/m):
//!         For each butterfly b = 0..half_m:
//!             twiddle = exp(sign * 2πi * b / m)
//!             even = src[g * half_m + b]
//!             odd = src[N/2 + g * half_m + b] * twiddle
//!             dst[g * m + b] = even + odd
//!             dst[g * m + b + half_m] = even - odd
//!     swap(src, dst)
//! ```

use num_complex::Complex64;
use std::f64::consts::PI;
use std::mem;

/// Direction of FFT computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftDirection {
    /// time domain → frequency domain, twiddle `e^(-2πi k / N)`
    Forward,
    /// frequency domain → time domain, twiddle `e^(+2πi k / N)`, scaled by `1/N`
    Inverse,
}

impl FftDirection {
    fn sign(self) -> f64 {
        match self {
            FftDirection::Forward => -1.0,
            FftDirection::Inverse => 1.0,
        }
    }
}

pub fn fft(input: &[Complex64]) -> Vec<Complex64> {
    transform(input, FftDirection::Forward)
}

/// inverse transform, so `ifft(&fft(x)) ≈ x`
pub fn ifft(input: &[Complex64]) -> Vec<Complex64> {
    transform(input, FftDirection::Inverse)
}

pub fn transform(input: &[Complex64], direction: FftDirection) -> Vec<Complex64> {
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }
    let mut output = if n.is_power_of_two() {
        stockham(input, direction)
    } else {
        direct(input, direction)
    };
    if direction == FftDirection::Inverse {
        let scale = 1.0 / n as f64;
        for v in &mut output {
            *v *= scale;
        }
    }
    output
}

fn twiddle(direction: FftDirection, numerator: usize, denominator: usize) -> Complex64 {
    let theta = direction.sign() * 2.0 * PI * numerator as f64 / denominator as f64;
    Complex64::new(theta.cos(), theta.sin())
}

fn stockham(input: &[Complex64], direction: FftDirection) -> Vec<Complex64> {
    let n = input.len();
    debug_assert!(n.is_power_of_two());
    let log_n = n.trailing_zeros();
    let mut src = input.to_vec();
    let mut dst = vec![Complex64::default(); n];
    for stage in 0..log_n {
        let m = 1 << (stage + 1);
        let half_m = 1 << stage;
        let groups = n / m;
        for g in 0..groups {
            for b in 0..half_m {
                let even = src[g * half_m + b];
                let odd = src[n / 2 + g * half_m + b] * twiddle(direction, b, m);
                dst[g * m + b] = even + odd;
                dst[g * m + b + half_m] = even - odd;
            }
        }
        mem::swap(&mut src, &mut dst);
    }
    src
}

fn direct(input: &[Complex64], direction: FftDirection) -> Vec<Complex64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(j, v)| v * twiddle(direction, (j * k) % n, n))
                .sum::<Complex64>()
        })
        .collect()
}
