use anyhow::Result;
use std::sync::Arc;

use crate::{
    analysis::EnergyCalculator,
    config::Config,
    repo::{self, HouseStore},
};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub store: Arc<dyn HouseStore>,
    pub calculator: EnergyCalculator,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let store = repo::from_config(&cfg.store)?;
        Ok(Self::with_store(cfg, store))
    }

    pub fn with_store(cfg: Config, store: Arc<dyn HouseStore>) -> Self {
        let calculator = EnergyCalculator::new(cfg.energy.tariff());
        Self { cfg, store, calculator }
    }
}
