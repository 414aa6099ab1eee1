// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use approx::assert_abs_diff_eq;
use num_traits::Zero;
use polykit::alignment::{round, rotate_left, Alignment};
use polykit::polynomial::{find_quotient_alignment, DEFAULT_DIGITS};
use polykit::prelude::*;
use polykit::Error;
use proptest::prelude::*;

fn poly(coefficients: &[f64]) -> Polynomial<f64> {
    Polynomial::new(coefficients.to_vec()).unwrap()
}

fn integer_coefficients(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-20i32..=20).prop_map(f64::from), 1..=max_len)
}

/// integer coefficients with a nonzero leading term
fn nonzero_leading(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (
        prop_oneof![-9i32..=-1, 1i32..=9],
        prop::collection::vec(-20i32..=20, 0..max_len),
    )
        .prop_map(|(leading, rest)| {
            std::iter::once(leading)
                .chain(rest)
                .map(f64::from)
                .collect()
        })
}

proptest! {
    #[test]
    fn product_order_is_sum_of_orders(a in integer_coefficients(8), b in integer_coefficients(8)) {
        let (a, b) = (poly(&a), poly(&b));
        prop_assert_eq!((&a * &b).order(), a.order() + b.order());
    }

    #[test]
    fn multiplication_is_associative(
        a in prop::collection::vec(-10.0f64..10.0, 1..6),
        b in prop::collection::vec(-10.0f64..10.0, 1..6),
        c in prop::collection::vec(-10.0f64..10.0, 1..6),
    ) {
        let (a, b, c) = (poly(&a), poly(&b), poly(&c));
        let left = &(&a * &b) * &c;
        let right = &a * &(&b * &c);
        prop_assert_eq!(
            round(left.coefficients(), DEFAULT_DIGITS),
            round(right.coefficients(), DEFAULT_DIGITS)
        );
    }

    #[test]
    fn exact_division_round_trips(a in integer_coefficients(10), b in nonzero_leading(5)) {
        let (a, b) = (poly(&a), poly(&b));
        let (quotient, remainder) = (&a * &b).div_rem(&b).unwrap();
        prop_assert!(quotient.approx_eq(&a, 1e-6), "{} != {}", quotient, a);
        prop_assert!(remainder.approx_eq(&Zero::zero(), 1e-6), "remainder {}", remainder);
    }

    #[test]
    fn zero_divisor_is_rejected(a in integer_coefficients(10), zeros in 1usize..5) {
        let zero = poly(&vec![0.0; zeros]);
        prop_assert_eq!(poly(&a).div_rem(&zero), Err(Error::DivisionByZero));
    }

    #[test]
    fn evaluation_matches_product(a in integer_coefficients(5), b in integer_coefficients(5), x in -2.0f64..2.0) {
        let (a, b) = (poly(&a), poly(&b));
        let expected = a.evaluate(x) * b.evaluate(x);
        assert_abs_diff_eq!((&a * &b).evaluate(x), expected, epsilon = 1e-6 * (1.0 + expected.abs()));
    }
}

#[test]
fn spectral_round_trip_finds_offset() {
    let a = [-33.0, -97.0, -65.0];
    let divisors: [&[f64]; 5] = [
        &[1.0, 2.0],
        &[3.0],
        &[4.0, -7.0, 1.0],
        &[2.0, 0.0, 5.0],
        &[-1.0, 0.5, 3.0, 0.25],
    ];
    for &b in &divisors {
        let b = poly(b);
        let c = &poly(&a) * &b;
        for &alignment in &[Alignment::End, Alignment::Start, Alignment::Split] {
            let (division, rotation) =
                find_quotient_alignment(&c, &b, &a, 1..=10, alignment, DEFAULT_DIGITS)
                    .unwrap()
                    .unwrap_or_else(|| panic!("no alignment for {} / {}", c, b));
            assert_eq!(
                rotate_left(&division.quotient, rotation),
                round(&a, DEFAULT_DIGITS)
            );
        }
    }
}

#[test]
fn spectral_and_exact_division_agree() {
    let a = poly(&[0.5, -1.25, 3.0, 7.0, -2.0]);
    let b = poly(&[2.0, 3.0, -1.0]);
    let c = &a * &b;
    let (exact, _) = c.div_rem(&b).unwrap();
    let spectral = c.spectral_div(&b, &SpectralDivisionOptions::default()).unwrap();
    assert_eq!(
        round(exact.coefficients(), DEFAULT_DIGITS),
        spectral.quotient
    );
}

#[test]
fn roots_of_spec_examples() {
    let roots = poly(&[2.0, -6.0]).roots().unwrap();
    assert_eq!(roots.len(), 1);
    assert_abs_diff_eq!(roots[0].re, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(roots[0].im, 0.0, epsilon = 1e-12);

    let mut roots = poly(&[1.0, 0.0, 4.0]).roots().unwrap();
    roots.sort_by(|l, r| r.im.partial_cmp(&l.im).unwrap());
    assert_abs_diff_eq!(roots[0].re, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(roots[0].im, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(roots[1].re, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(roots[1].im, -2.0, epsilon = 1e-12);
}

#[test]
fn scalar_polynomials_mix_real_and_complex() {
    let p = Polynomial::new(vec![Scalar::from(1.0), Scalar::from(0.0), Scalar::from(4.0)]).unwrap();
    let at_two_i = p.evaluate(Scalar::from(num_complex::Complex64::new(0.0, 2.0)));
    assert!(!at_two_i.is_real());
    assert_eq!(at_two_i, Scalar::Real(0.0));
    assert_eq!(p.to_string(), "1 * x^2 + 4");
}
