#[cfg(feature = "cli")]
pub mod adapters;
pub mod correlations;
pub mod error;
pub mod fluid;
pub mod models;

pub use crate::error::{AppError, DomainError};
pub use crate::fluid::calculator::{FluidModel, FluidProperties, FluidSummary, compute_summary};
pub use crate::models::{BrineParameters, Fluid, FluidKind, OilParameters, ValidationMode};
