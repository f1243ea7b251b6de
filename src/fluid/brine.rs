//! Brine correlations (Batzle & Wang 1992, eqs. 27-29).
//!
//! Temperatures in °C, pressures in MPa, salinity as NaCl weight fraction.

use crate::correlations::{BRINE_GAS_SOFTENING, GPA_PER_G_CC_M2_S2, W_COEFF, bivariate_poly};

/// Pure water density in g/cc (eq. 27a).
pub fn water_density(t: f64, p: f64) -> f64 {
    1.0 + 1e-6
        * (-80.0 * t - 3.3 * t.powi(2) + 0.00175 * t.powi(3) + 489.0 * p - 2.0 * t * p
            + 0.016 * t.powi(2) * p
            - 1.3e-5 * t.powi(3) * p
            - 0.333 * p.powi(2)
            - 0.002 * t * p.powi(2))
}

/// NaCl brine density in g/cc (eq. 27b).
///
/// Other dissolved salts can introduce considerable error; this is not checked.
pub fn brine_density(t: f64, p: f64, s: f64) -> f64 {
    water_density(t, p)
        + s * (0.668
            + 0.44 * s
            + 1e-6 * (300.0 * p - 2400.0 * p * s + t * (80.0 + 3.0 * t - 3300.0 * s - 13.0 * p + 47.0 * p * s)))
}

/// Pure water acoustic velocity in m/s (eq. 28).
///
/// Calibrated for 0 < T <= 100 °C and 0 < P <= 100 MPa; extrapolation is not flagged.
pub fn water_velocity(t: f64, p: f64) -> f64 {
    bivariate_poly(&W_COEFF, t, p)
}

/// Brine acoustic velocity in m/s (eq. 29).
pub fn brine_velocity(t: f64, p: f64, s: f64) -> f64 {
    water_velocity(t, p)
        + s * (1170.0 - 9.6 * t + 0.055 * t.powi(2) - 8.5e-5 * t.powi(3) + 2.6 * p
            - 0.0029 * t * p
            - 0.0476 * p.powi(2))
        + s.powf(1.5) * (780.0 - 10.0 * p + 0.16 * p.powi(2))
        - 820.0 * s.powi(2)
}

/// Brine bulk modulus in GPa.
///
/// When `live`, dissolved gas softens the modulus by `1 + 0.0494·Rg`.
pub fn bulk_modulus(t: f64, p: f64, s: f64, rg: f64, live: bool) -> f64 {
    let gas_free = brine_density(t, p, s) * brine_velocity(t, p, s).powi(2);
    let k = if live {
        gas_free / (1.0 + BRINE_GAS_SOFTENING * rg)
    } else {
        gas_free
    };
    k / GPA_PER_G_CC_M2_S2
}

/// Brine viscosity in centipoise. Pressure and dissolved gas are ignored.
/// Valid below 250 °C.
pub fn viscosity(t: f64, s: f64) -> f64 {
    0.1 + 0.333 * s
        + (1.65 + 91.9 * s.powi(3))
            * (-(0.42 * (s.powf(0.8) - 0.17).powi(2) + 0.045) * t.powf(0.8)).exp()
}
