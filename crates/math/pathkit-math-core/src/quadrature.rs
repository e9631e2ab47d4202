//! Fixed-order numerical integration.
//!
//! [`integrate_by_gauss_legendre`] is the workhorse used by the interpolators:
//! a 5-point Gauss-Legendre rule, exact for polynomials up to degree 9.
//! [`GaussLegendre`] builds rules of any order, and the Simpson/trapezoidal
//! helpers integrate uniformly spaced samples.

use thiserror::Error;

/// Errors produced by the quadrature helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("gauss-legendre order must be at least 1")]
    ZeroOrder,
    #[error("{rule} needs at least {min} samples, got {got}")]
    TooFewSamples {
        rule: &'static str,
        min: usize,
        got: usize,
    },
    #[error("simpson's rule needs an odd number of samples, got {0}")]
    EvenSampleCount(usize),
}

// Nodes and weights of the 5-point rule on [-1, 1].
const GL5_NODES: [f64; 5] = [
    -0.906_179_845_938_664,
    -0.538_469_310_105_683_1,
    0.0,
    0.538_469_310_105_683_1,
    0.906_179_845_938_664,
];
const GL5_WEIGHTS: [f64; 5] = [
    0.236_926_885_056_189_1,
    0.478_628_670_499_366_5,
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
];

const NEWTON_TOLERANCE: f64 = 1e-15;
const NEWTON_MAX_ITERS: usize = 100;

#[inline]
fn weighted_sum<F>(func: F, nodes: &[f64], weights: &[f64], a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let half_width = 0.5 * (b - a);
    let center = 0.5 * (a + b);
    let sum: f64 = nodes
        .iter()
        .zip(weights)
        .map(|(&x, &w)| w * func(center + half_width * x))
        .sum();
    sum * half_width
}

/// Integrate `func` over `[a, b]` with the 5-point Gauss-Legendre rule.
///
/// Reversed bounds give the negated integral; equal bounds give zero.
pub fn integrate_by_gauss_legendre<F>(func: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    weighted_sum(func, &GL5_NODES, &GL5_WEIGHTS, a, b)
}

/// Evaluate the Legendre polynomial `P_n(z)` and its derivative.
fn legendre_with_derivative(n: usize, z: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let mut p_prev = 1.0;
    let mut p = z;
    for j in 2..=n {
        let jf = j as f64;
        let next = ((2.0 * jf - 1.0) * z * p - (jf - 1.0) * p_prev) / jf;
        p_prev = p;
        p = next;
    }
    let dp = n as f64 * (z * p - p_prev) / (z * z - 1.0);
    (p, dp)
}

/// Gauss-Legendre rule of arbitrary order on `[-1, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Compute nodes and weights for an `order`-point rule.
    ///
    /// Nodes are the roots of `P_order`, found by Newton iteration from a
    /// Chebyshev initial guess; they are returned in ascending order.
    pub fn new(order: usize) -> Result<Self, QuadratureError> {
        if order == 0 {
            return Err(QuadratureError::ZeroOrder);
        }
        let n = order;
        let mut nodes = vec![0.0; n];
        let mut weights = vec![0.0; n];
        for i in 0..n.div_ceil(2) {
            let mut z = ((i as f64 + 0.75) / (n as f64 + 0.5) * std::f64::consts::PI).cos();
            for _ in 0..NEWTON_MAX_ITERS {
                let (p, dp) = legendre_with_derivative(n, z);
                let step = p / dp;
                z -= step;
                if step.abs() < NEWTON_TOLERANCE {
                    break;
                }
            }
            let (_, dp) = legendre_with_derivative(n, z);
            let w = 2.0 / ((1.0 - z * z) * dp * dp);
            nodes[i] = -z;
            nodes[n - 1 - i] = z;
            weights[i] = w;
            weights[n - 1 - i] = w;
        }
        Ok(Self { nodes, weights })
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes on `[-1, 1]`, ascending.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Weights matching [`Self::nodes`].
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Integrate `func` over `[a, b]`.
    pub fn integrate<F>(&self, func: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        weighted_sum(func, &self.nodes, &self.weights, a, b)
    }
}

/// Composite Simpson's rule over uniformly spaced samples.
///
/// `samples` must hold an odd count of at least three values spaced `dx` apart.
pub fn integrate_by_simpson(samples: &[f64], dx: f64) -> Result<f64, QuadratureError> {
    let n = samples.len();
    if n < 3 {
        return Err(QuadratureError::TooFewSamples {
            rule: "simpson",
            min: 3,
            got: n,
        });
    }
    if n % 2 == 0 {
        return Err(QuadratureError::EvenSampleCount(n));
    }
    let interior: f64 = samples[1..n - 1]
        .iter()
        .enumerate()
        .map(|(i, f)| if i % 2 == 0 { 4.0 * f } else { 2.0 * f })
        .sum();
    Ok(dx / 3.0 * (samples[0] + interior + samples[n - 1]))
}

/// Composite trapezoidal rule over uniformly spaced samples.
pub fn integrate_by_trapezoidal(samples: &[f64], dx: f64) -> Result<f64, QuadratureError> {
    let n = samples.len();
    if n < 2 {
        return Err(QuadratureError::TooFewSamples {
            rule: "trapezoidal",
            min: 2,
            got: n,
        });
    }
    let sum: f64 = samples.iter().sum();
    Ok(dx * (sum - 0.5 * (samples[0] + samples[n - 1])))
}
