//! House energy analysis service.
//!
//! [`analysis`] holds the pure estimation engine; [`api`] and [`repo`] wrap
//! it in a small house CRUD service.

pub mod analysis;
pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod repo;
pub mod telemetry;

pub use analysis::{analyze, AnalysisError, EnergyCalculator};
pub use domain::{EnergyAnalysis, EnergyFeature, EnergyFeatureType, House, Improvement, Tariff};
