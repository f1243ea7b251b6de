use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Brine state: temperature [°C], pressure [MPa], NaCl weight fraction and
/// dissolved gas. Fields are public and unchecked; see [`BrineParameters::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrineParameters {
    pub temperature: f64,
    pub pressure: f64,
    pub salinity: f64,
    pub solution_gas_ratio: f64,
    pub live: bool,
}

impl Default for BrineParameters {
    fn default() -> Self {
        Self {
            temperature: 45.0, // 25 °C/km gradient at 1 km depth
            pressure: 10.0,    // roughly hydrostatic at 1 km
            salinity: 0.035,   // seawater
            solution_gas_ratio: 0.0,
            live: false,
        }
    }
}

/// Oil state: temperature [°C], pressure [MPa], API gravity, gas specific
/// gravity (air = 1) and dissolved gas ratio [L/L].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OilParameters {
    pub temperature: f64,
    pub pressure: f64,
    pub api_gravity: f64,
    pub gas_gravity: f64,
    pub solution_gas_ratio: f64,
    pub live: bool,
}

impl Default for OilParameters {
    fn default() -> Self {
        Self {
            temperature: 45.0,
            pressure: 10.0,
            api_gravity: 39.6,
            gas_gravity: 0.6,
            solution_gas_ratio: 5.0,
            live: false,
        }
    }
}

/// Fluid kind tag, used by the input document and the `--fluid` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FluidKind {
    Brine,
    Oil,
}

impl fmt::Display for FluidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluidKind::Brine => f.write_str("brine"),
            FluidKind::Oil => f.write_str("oil"),
        }
    }
}

/// A reservoir fluid together with its parameters.
///
/// Serialized as `{"fluid": "brine", "parameters": {...}}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fluid", content = "parameters", rename_all = "lowercase")]
pub enum Fluid {
    Brine(BrineParameters),
    Oil(OilParameters),
}

impl Fluid {
    /// Default parameters for the given kind.
    pub fn with_defaults(kind: FluidKind) -> Self {
        match kind {
            FluidKind::Brine => Fluid::Brine(BrineParameters::default()),
            FluidKind::Oil => Fluid::Oil(OilParameters::default()),
        }
    }

    pub fn kind(&self) -> FluidKind {
        match self {
            Fluid::Brine(_) => FluidKind::Brine,
            Fluid::Oil(_) => FluidKind::Oil,
        }
    }

    pub fn temperature(&self) -> f64 {
        match self {
            Fluid::Brine(b) => b.temperature,
            Fluid::Oil(o) => o.temperature,
        }
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        match self {
            Fluid::Brine(b) => b.temperature = temperature,
            Fluid::Oil(o) => o.temperature = temperature,
        }
    }

    pub fn pressure(&self) -> f64 {
        match self {
            Fluid::Brine(b) => b.pressure,
            Fluid::Oil(o) => o.pressure,
        }
    }

    pub fn set_pressure(&mut self, pressure: f64) {
        match self {
            Fluid::Brine(b) => b.pressure = pressure,
            Fluid::Oil(o) => o.pressure = pressure,
        }
    }

    pub fn solution_gas_ratio(&self) -> f64 {
        match self {
            Fluid::Brine(b) => b.solution_gas_ratio,
            Fluid::Oil(o) => o.solution_gas_ratio,
        }
    }

    pub fn set_solution_gas_ratio(&mut self, rg: f64) {
        match self {
            Fluid::Brine(b) => b.solution_gas_ratio = rg,
            Fluid::Oil(o) => o.solution_gas_ratio = rg,
        }
    }

    pub fn is_live(&self) -> bool {
        match self {
            Fluid::Brine(b) => b.live,
            Fluid::Oil(o) => o.live,
        }
    }

    pub fn set_live(&mut self, live: bool) {
        match self {
            Fluid::Brine(b) => b.live = live,
            Fluid::Oil(o) => o.live = live,
        }
    }
}

impl Default for Fluid {
    fn default() -> Self {
        Fluid::with_defaults(FluidKind::Brine)
    }
}

/// Whether calculations check their inputs first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// No checks; out-of-domain input surfaces as NaN or infinity.
    #[default]
    Permissive,
    /// Reject out-of-range input and non-finite results with a [`DomainError`].
    Strict,
}

fn check(
    parameter: &'static str,
    value: f64,
    in_range: bool,
    expected: &'static str,
) -> Result<(), DomainError> {
    if in_range && value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::OutOfRange {
            parameter,
            value,
            expected,
        })
    }
}

impl BrineParameters {
    /// Check the parameters against the validity range of the brine correlations.
    pub fn validate(&self) -> Result<(), DomainError> {
        let t = self.temperature;
        let p = self.pressure;
        let s = self.salinity;
        let rg = self.solution_gas_ratio;
        check("temperature", t, t > 0.0 && t <= 100.0, "0 < T <= 100 °C")?;
        check("pressure", p, p > 0.0 && p <= 100.0, "0 < P <= 100 MPa")?;
        check("salinity", s, (0.0..=1.0).contains(&s), "0 <= S <= 1")?;
        check("solution_gas_ratio", rg, rg >= 0.0, "Rg >= 0 L/L")?;
        Ok(())
    }
}

impl OilParameters {
    /// Check the parameters against the validity range of the oil correlations.
    ///
    /// A live oil without a positive gas gravity reports
    /// [`DomainError::MissingLiveParameter`] rather than a range error.
    pub fn validate(&self) -> Result<(), DomainError> {
        let t = self.temperature;
        let p = self.pressure;
        let api = self.api_gravity;
        let rg = self.solution_gas_ratio;
        check("temperature", t, (0.0..250.0).contains(&t), "0 <= T < 250 °C")?;
        check("pressure", p, p > 0.0, "P > 0 MPa")?;
        check("api_gravity", api, api > 0.0, "API > 0")?;
        check("solution_gas_ratio", rg, rg >= 0.0, "Rg >= 0 L/L")?;
        if self.live {
            if !(self.gas_gravity > 0.0) {
                return Err(DomainError::MissingLiveParameter {
                    parameter: "gas_gravity",
                });
            }
            check("gas_gravity", self.gas_gravity, true, "G > 0")?;
        }
        Ok(())
    }
}
