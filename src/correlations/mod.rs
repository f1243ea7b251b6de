//! Correlations module: Batzle & Wang (1992) coefficients and numeric helpers.
//!
//! This module provides:
//! - The 5×4 water velocity coefficient table (eq. 28)
//! - Oil reference-density constants (API gravity conversion)
//! - Unit correction factors shared by the brine and oil models
//! - A bivariate polynomial evaluator used for the water velocity surface
//!
//! Units conventions:
//! - Temperature in °C, pressure in MPa
//! - Densities in g/cc, velocities in m/s
//! - `ρ·V²` in (g/cc)·(m/s)² is divided by `GPA_PER_G_CC_M2_S2` to give GPa
//!
//! # Examples
//! ```rust
//! use rockfluid_rs::correlations::{W_COEFF, bivariate_poly};
//!
//! // Only the constant term survives at the origin.
//! assert_eq!(bivariate_poly(&W_COEFF, 0.0, 0.0), W_COEFF[0][0]);
//! ```
//!
//! # Panics
//! None of the functions panic; out-of-domain inputs propagate as NaN or infinity.
//!
//! # See Also
//! - Batzle, M. and Wang, Z. (1992), Seismic properties of pore fluids,
//!   Geophysics 57(11), 1396-1408.

/// Water velocity coefficients `W[i][j]` multiplying `T^i · P^j` (eq. 28).
/// Rows are temperature powers 0..=4, columns pressure powers 0..=3.
#[allow(clippy::excessive_precision)]
pub const W_COEFF: [[f64; 4]; 5] = [
    [1402.85, 1.524, 3.437e-3, -1.197e-5],
    [4.871, -0.0111, 1.739e-4, -1.628e-6],
    [-0.04783, 2.747e-4, -2.135e-6, 1.237e-8],
    [1.487e-4, -6.503e-7, -1.455e-8, 1.327e-10],
    [-2.197e-7, 7.987e-10, 5.230e-11, -4.614e-13],
];

/// Numerator of the API gravity to specific gravity conversion.
pub const API_NUMERATOR: f64 = 141.5;
/// Offset of the API gravity to specific gravity conversion.
pub const API_OFFSET: f64 = 131.5;

/// Divisor turning `ρ[g/cc] · V²[m²/s²]` into GPa.
pub const GPA_PER_G_CC_M2_S2: f64 = 1e6;

/// Softening coefficient of dissolved gas on brine bulk modulus, per L/L of Rg.
pub const BRINE_GAS_SOFTENING: f64 = 0.0494;

/// Evaluate `Σ_i Σ_j c[i][j] · x^i · y^j`.
///
/// Powers are accumulated by repeated multiplication, so every `(i, j)` term
/// is visited exactly once and no `powi` call is needed. At `x = y = 0` the
/// result is exactly `c[0][0]`.
pub fn bivariate_poly<const M: usize, const N: usize>(c: &[[f64; N]; M], x: f64, y: f64) -> f64 {
    let mut sum = 0.0;
    let mut x_i = 1.0;
    for row in c {
        let mut y_j = 1.0;
        for coeff in row {
            sum += coeff * x_i * y_j;
            y_j *= y;
        }
        x_i *= x;
    }
    sum
}
