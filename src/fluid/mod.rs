//! Batzle & Wang fluid models.
//!
//! [`brine`] and [`oil`] hold the per-fluid correlations as free functions of
//! plain numbers; [`calculator`] ties them to the parameter types through the
//! [`FluidModel`](calculator::FluidModel) trait.

pub mod brine;
pub mod calculator;
pub mod oil;
