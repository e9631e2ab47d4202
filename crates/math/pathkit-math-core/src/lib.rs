//! pathkit-math-core: numeric primitives for path interpolation.
//!
//! - `angle`: heading normalization
//! - `hermite`: two-point Hermite spline fitting with derivative evaluation
//! - `quadrature`: Gauss-Legendre, Simpson and trapezoidal integration

pub mod angle;
pub mod hermite;
pub mod quadrature;

pub use angle::normalize_angle;
pub use hermite::{HermiteSpline, SplineError};
pub use quadrature::{
    integrate_by_gauss_legendre, integrate_by_simpson, integrate_by_trapezoidal, GaussLegendre,
    QuadratureError,
};
