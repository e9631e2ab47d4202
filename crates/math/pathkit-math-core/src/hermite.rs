//! Two-point Hermite spline.
//!
//! Given k derivative constraints (value, first derivative, ...) at each end of
//! a domain `[x0, x1]`, the spline is the unique polynomial of degree `2k - 1`
//! that meets all `2k` constraints. Coefficients are stored in the monomial
//! basis of the local coordinate `u = x - x0`:
//!
//! ```text
//! p(x) = c0 + c1*u + c2*u^2 + ... + c(2k-1)*u^(2k-1)
//! ```
//!
//! The start constraints fix `c0..c(k-1)` directly. The remaining `k`
//! coefficients come from a `k x k` solve on the end constraints, carried out
//! in the normalized coordinate `t = u / (x1 - x0)` so the system does not
//! depend on the domain width.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Errors produced while fitting a [`HermiteSpline`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("hermite spline needs at least one constraint per side")]
    EmptyConstraints,
    #[error("hermite constraint count mismatch: {start} at start, {end} at end")]
    MismatchedConstraints { start: usize, end: usize },
    #[error("hermite domain [{x0}, {x1}] must be finite with x0 < x1")]
    DegenerateDomain { x0: f64, x1: f64 },
    #[error("hermite end-constraint system is singular")]
    Singular,
}

/// Immutable Hermite polynomial fitted to boundary derivative constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct HermiteSpline {
    x0: f64,
    x1: f64,
    coefs: Vec<f64>,
}

/// `j! / (j - m)!`, the factor the m-th derivative puts in front of `u^(j-m)`.
#[inline]
fn falling_factorial(j: usize, m: usize) -> f64 {
    if m > j {
        return 0.0;
    }
    ((j - m + 1)..=j).fold(1.0, |acc, i| acc * i as f64)
}

impl HermiteSpline {
    /// Fit a spline of degree `2k - 1` where `k = start.len() == end.len()`.
    ///
    /// `start[m]` and `end[m]` are the m-th derivatives at `x0` and `x1`.
    pub fn new(start: &[f64], end: &[f64], x0: f64, x1: f64) -> Result<Self, SplineError> {
        let k = start.len();
        if k == 0 {
            return Err(SplineError::EmptyConstraints);
        }
        if end.len() != k {
            return Err(SplineError::MismatchedConstraints {
                start: k,
                end: end.len(),
            });
        }
        let h = x1 - x0;
        if !(h > 0.0 && h.is_finite()) {
            return Err(SplineError::DegenerateDomain { x0, x1 });
        }

        // Scaled coefficients b_j = c_j * h^j for the normalized coordinate t.
        let mut scaled = vec![0.0; 2 * k];
        let mut h_pow = 1.0;
        for (m, value) in start.iter().enumerate() {
            scaled[m] = value * h_pow / falling_factorial(m, m);
            h_pow *= h;
        }

        let mat = DMatrix::from_fn(k, k, |m, i| falling_factorial(k + i, m));
        let mut rhs = DVector::zeros(k);
        let mut h_pow = 1.0;
        for (m, value) in end.iter().enumerate() {
            let known: f64 = (m..k)
                .map(|j| scaled[j] * falling_factorial(j, m))
                .sum();
            rhs[m] = value * h_pow - known;
            h_pow *= h;
        }
        let solved = mat.lu().solve(&rhs).ok_or(SplineError::Singular)?;
        scaled[k..].copy_from_slice(solved.as_slice());

        let mut h_pow = 1.0;
        let coefs = scaled
            .into_iter()
            .map(|b| {
                let c = b / h_pow;
                h_pow *= h;
                c
            })
            .collect();

        Ok(Self { x0, x1, coefs })
    }

    /// Degree-3 spline from `[value, first derivative]` at each end.
    pub fn cubic(start: [f64; 2], end: [f64; 2], x0: f64, x1: f64) -> Result<Self, SplineError> {
        Self::new(&start, &end, x0, x1)
    }

    /// Degree-5 spline from `[value, first, second derivative]` at each end.
    pub fn quintic(start: [f64; 3], end: [f64; 3], x0: f64, x1: f64) -> Result<Self, SplineError> {
        Self::new(&start, &end, x0, x1)
    }

    /// Evaluate the `order`-th derivative at `x`.
    ///
    /// `x` may lie outside the fitted domain; the polynomial is extrapolated.
    /// Orders above the degree evaluate to zero.
    pub fn evaluate(&self, order: usize, x: f64) -> f64 {
        let u = x - self.x0;
        let n = self.coefs.len();
        if order >= n {
            return 0.0;
        }
        let mut result = 0.0;
        for j in (order..n).rev() {
            result = f64::mul_add(result, u, self.coefs[j] * falling_factorial(j, order));
        }
        result
    }

    /// Polynomial degree, `2k - 1` for `k` constraints per end.
    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    /// The fitted interval `(x0, x1)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.x0, self.x1)
    }

    /// Monomial coefficients in powers of `x - x0`, lowest order first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefs
    }
}
