// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

/// Sampling interface for collaborators that only need `x -> f(x)`.
pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}
