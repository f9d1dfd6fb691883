//! # Energy Analysis
//!
//! Estimates annual energy use, cost and CO2 of a house from a handful of
//! optional attributes and splits it into features:
//!
//! - [`heuristics`]: baseline kWh from floor area and construction year
//! - [`weights`]: share of envelope loss per surface (floor, roof, wall, window)
//! - [`improvements`]: reductions of the heating figure for installed improvements
//! - [`calculator`]: composes the above into an [`EnergyAnalysis`](crate::domain::EnergyAnalysis)
//!
//! A missing input removes the features that depend on it; it never turns
//! into a zero. The computation is pure and allocation-light, so it runs
//! inline in request handlers.

pub mod calculator;
pub mod heuristics;
pub mod improvements;
pub mod interpolate;
pub mod weights;

pub use calculator::{analyze, EnergyCalculator};
pub use weights::SurfaceWeights;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    /// The surface weights do not add up to one. Only a formula defect or a
    /// non-positive area or floor count gets here.
    #[error("internal error: surface weights sum to {sum}, expected 1")]
    InvalidWeights { sum: f64 },
}
