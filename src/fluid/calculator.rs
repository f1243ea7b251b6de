use serde::Serialize;
use tracing::{debug, warn};

use crate::error::DomainError;
use crate::fluid::{brine, oil};
use crate::models::{BrineParameters, Fluid, FluidKind, OilParameters, ValidationMode};

/// Bulk modulus and density of a fluid, in that order.
///
/// Converts into the `(bulk_modulus, density)` tuple for callers that want
/// the ordered pair.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// GPa
    pub bulk_modulus: f64,
    /// g/cc
    pub density: f64,
}

impl From<FluidProperties> for (f64, f64) {
    fn from(p: FluidProperties) -> Self {
        (p.bulk_modulus, p.density)
    }
}

/// Elastic and transport properties shared by every fluid model.
///
/// Implementations are pure: each call re-reads the parameters and nothing is
/// cached, so repeated calls on unchanged parameters return identical bits.
pub trait FluidModel {
    /// Density at reservoir conditions, g/cc.
    fn density(&self) -> f64;
    /// Compressional (P-wave) velocity, m/s.
    fn compressional_velocity(&self) -> f64;
    /// Adiabatic bulk modulus, GPa.
    fn bulk_modulus(&self) -> f64;
    /// Dynamic viscosity, centipoise.
    fn viscosity(&self) -> f64;
    /// Check the parameters against the correlation validity range.
    fn validate(&self) -> Result<(), DomainError>;

    fn properties(&self) -> FluidProperties {
        FluidProperties {
            bulk_modulus: self.bulk_modulus(),
            density: self.density(),
        }
    }

    /// [`properties`](FluidModel::properties) after validation, rejecting
    /// non-finite results.
    fn checked_properties(&self) -> Result<FluidProperties, DomainError> {
        self.validate()?;
        let props = self.properties();
        ensure_finite("bulk_modulus", props.bulk_modulus)?;
        ensure_finite("density", props.density)?;
        Ok(props)
    }
}

fn ensure_finite(quantity: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFiniteResult { quantity })
    }
}

impl FluidModel for BrineParameters {
    fn density(&self) -> f64 {
        brine::brine_density(self.temperature, self.pressure, self.salinity)
    }

    fn compressional_velocity(&self) -> f64 {
        brine::brine_velocity(self.temperature, self.pressure, self.salinity)
    }

    fn bulk_modulus(&self) -> f64 {
        brine::bulk_modulus(
            self.temperature,
            self.pressure,
            self.salinity,
            self.solution_gas_ratio,
            self.live,
        )
    }

    fn viscosity(&self) -> f64 {
        brine::viscosity(self.temperature, self.salinity)
    }

    fn validate(&self) -> Result<(), DomainError> {
        BrineParameters::validate(self)
    }
}

impl OilParameters {
    /// Stock-tank density from the API gravity, g/cc.
    pub fn reference_density(&self) -> f64 {
        oil::reference_density(self.api_gravity)
    }

    /// `Bo` for a live oil; `None` when the oil is dead.
    pub fn formation_volume_factor(&self) -> Option<f64> {
        self.live.then(|| {
            oil::formation_volume_factor(
                self.temperature,
                self.api_gravity,
                self.solution_gas_ratio,
                self.gas_gravity,
            )
        })
    }
}

impl FluidModel for OilParameters {
    fn density(&self) -> f64 {
        if self.live {
            oil::live_density(
                self.temperature,
                self.api_gravity,
                self.solution_gas_ratio,
                self.gas_gravity,
            )
        } else {
            oil::dead_density(self.temperature, self.pressure, self.api_gravity)
        }
    }

    fn compressional_velocity(&self) -> f64 {
        oil::velocity(self.temperature, self.pressure, self.api_gravity)
    }

    fn bulk_modulus(&self) -> f64 {
        oil::bulk_modulus(self.density(), self.compressional_velocity())
    }

    fn viscosity(&self) -> f64 {
        let rho = if self.live {
            self.density()
        } else {
            self.reference_density()
        };
        oil::viscosity(self.temperature, self.pressure, rho)
    }

    fn validate(&self) -> Result<(), DomainError> {
        OilParameters::validate(self)
    }
}

impl FluidModel for Fluid {
    fn density(&self) -> f64 {
        match self {
            Fluid::Brine(b) => b.density(),
            Fluid::Oil(o) => o.density(),
        }
    }

    fn compressional_velocity(&self) -> f64 {
        match self {
            Fluid::Brine(b) => b.compressional_velocity(),
            Fluid::Oil(o) => o.compressional_velocity(),
        }
    }

    fn bulk_modulus(&self) -> f64 {
        match self {
            Fluid::Brine(b) => b.bulk_modulus(),
            Fluid::Oil(o) => o.bulk_modulus(),
        }
    }

    fn viscosity(&self) -> f64 {
        match self {
            Fluid::Brine(b) => b.viscosity(),
            Fluid::Oil(o) => o.viscosity(),
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        match self {
            Fluid::Brine(b) => b.validate(),
            Fluid::Oil(o) => o.validate(),
        }
    }
}

/// Summary of every property for one fluid, as printed by the CLI.
///
/// Fields:
/// - `density_g_cc`: density at reservoir conditions
/// - `compressional_velocity_m_s`: P-wave velocity
/// - `bulk_modulus_gpa`: adiabatic bulk modulus
/// - `viscosity_cp`: dynamic viscosity in centipoise
/// - `formation_volume_factor`: `Bo`, present for live oil only
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FluidSummary {
    pub fluid: FluidKind,
    pub live: bool,
    pub density_g_cc: f64,
    pub compressional_velocity_m_s: f64,
    pub bulk_modulus_gpa: f64,
    pub viscosity_cp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_volume_factor: Option<f64>,
}

impl FluidSummary {
    fn quantities(&self) -> [(&'static str, f64); 4] {
        [
            ("density", self.density_g_cc),
            ("compressional_velocity", self.compressional_velocity_m_s),
            ("bulk_modulus", self.bulk_modulus_gpa),
            ("viscosity", self.viscosity_cp),
        ]
    }
}

/// Compute a [`FluidSummary`] for `fluid`.
///
/// In [`ValidationMode::Permissive`] this never fails; non-finite values are
/// logged and returned as-is. In [`ValidationMode::Strict`] the parameters are
/// validated first and any non-finite property is reported as
/// [`DomainError::NonFiniteResult`].
pub fn compute_summary(fluid: &Fluid, mode: ValidationMode) -> Result<FluidSummary, DomainError> {
    debug!(fluid = %fluid.kind(), live = fluid.is_live(), ?mode, "computing fluid summary");

    if mode == ValidationMode::Strict {
        fluid.validate()?;
    }

    let summary = FluidSummary {
        fluid: fluid.kind(),
        live: fluid.is_live(),
        density_g_cc: fluid.density(),
        compressional_velocity_m_s: fluid.compressional_velocity(),
        bulk_modulus_gpa: fluid.bulk_modulus(),
        viscosity_cp: fluid.viscosity(),
        formation_volume_factor: match fluid {
            Fluid::Oil(o) => o.formation_volume_factor(),
            Fluid::Brine(_) => None,
        },
    };

    for (quantity, value) in summary.quantities() {
        if value.is_finite() {
            continue;
        }
        match mode {
            ValidationMode::Strict => return Err(DomainError::NonFiniteResult { quantity }),
            ValidationMode::Permissive => {
                warn!(quantity, value, "correlation evaluated outside its domain");
            }
        }
    }

    Ok(summary)
}
