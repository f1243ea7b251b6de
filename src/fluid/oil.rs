//! Oil correlations (Batzle & Wang 1992, eqs. 18-26).
//!
//! Temperatures in °C, pressures in MPa, gas ratio in L/L, densities in g/cc.

use crate::correlations::{API_NUMERATOR, API_OFFSET, GPA_PER_G_CC_M2_S2};

/// Stock-tank (reference) density from API gravity, g/cc.
///
/// `api = -131.5` is a singularity and yields infinity.
pub fn reference_density(api: f64) -> f64 {
    API_NUMERATOR / (api + API_OFFSET)
}

/// Dead oil density at reservoir conditions (eqs. 18 and 19).
pub fn dead_density(t: f64, p: f64, api: f64) -> f64 {
    let rho0 = reference_density(api);
    let rho_p = rho0 + (0.00277 * p - 1.71e-7 * p.powi(3)) * (rho0 - 1.15).powi(2) + 3.49e-4 * p;
    rho_p / (0.972 + 3.81e-4 * (t + 17.78).powf(1.175))
}

/// Formation-volume factor `Bo` of a gas-saturated oil (eq. 23).
///
/// `g` must be positive; otherwise `sqrt(g / rho0)` is NaN.
pub fn formation_volume_factor(t: f64, api: f64, rg: f64, g: f64) -> f64 {
    let rho0 = reference_density(api);
    0.972 + 0.00038 * (2.4 * rg * (g / rho0).sqrt() + t + 17.8).powf(1.175)
}

/// Live (gas-saturated) oil density (eq. 24).
pub fn live_density(t: f64, api: f64, rg: f64, g: f64) -> f64 {
    let rho0 = reference_density(api);
    (rho0 + 0.0012 * g * rg) / formation_volume_factor(t, api, rg, g)
}

/// Oil compressional velocity in m/s (eq. 20a).
///
/// The correlation has no live branch; it is used for live oil unchanged.
pub fn velocity(t: f64, p: f64, api: f64) -> f64 {
    15450.0 / (77.1 + api).sqrt() - 3.7 * t + 4.64 * p + 0.0115 * (0.36 * api.sqrt() - 1.0) * t * p
}

/// Bulk modulus in GPa from density [g/cc] and velocity [m/s].
pub fn bulk_modulus(density: f64, velocity: f64) -> f64 {
    density * velocity.powi(2) / GPA_PER_G_CC_M2_S2
}

/// Oil viscosity in centipoise (eqs. 25a, 25b, 26a, 26b).
///
/// `rho` is the reference density driving the correlation. When the
/// temperature term `mu_t` is not positive, or so small that
/// `log10(mu_t) + 2` is negative, the result is NaN.
pub fn viscosity(t: f64, p: f64, rho: f64) -> f64 {
    let y = 10f64.powf(5.693 - 2.863 / rho);
    let mu_t = 10f64.powf(0.505 * y * (17.8 + t).powf(-1.163)) - 1.0;
    let log_mu = mu_t.log10();
    let i = 10f64.powf(18.6 * (0.1 * log_mu + (log_mu + 2.0).powf(-0.1) - 0.985));
    mu_t + 0.145 * p * i
}
