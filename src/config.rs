use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::{domain::Tariff, telemetry::LogConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub energy: EnergyConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub enable_cors: bool,
}

fn default_request_timeout() -> u64 {
    30
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Which datastore backend holds the house records.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub backend: String,
}

/// Economic and environmental constants applied to every analysis.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EnergyConfig {
    /// NOK per kWh
    pub price_per_kwh: f64,
    /// kg CO2 equivalents per kWh
    pub co2_per_kwh: f64,
}

impl EnergyConfig {
    pub fn tariff(&self) -> Tariff {
        Tariff::new(self.price_per_kwh, self.co2_per_kwh)
    }

    fn check(&self) -> Result<()> {
        let values = [("price_per_kwh", self.price_per_kwh), ("co2_per_kwh", self.co2_per_kwh)];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("energy.{name} must be a finite, non-negative number, was {value}");
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file("config/default.toml"))
                .merge(Env::prefixed("HOUSE_ENERGY__").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment.extract()?;
        cfg.energy.check()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::Serialized;

    fn base() -> Figment {
        Figment::new().merge(Toml::string(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [store]
            backend = "memory"

            [energy]
            price_per_kwh = 1.2
            co2_per_kwh = 0.017
            "#,
        ))
    }

    #[test]
    fn test_load_defaults() {
        let cfg = Config::from_figment(base()).unwrap();
        assert_eq!(cfg.server.request_timeout_secs, 30);
        assert!(!cfg.server.enable_cors);
        assert_eq!(cfg.store.backend, "memory");
        assert_eq!(cfg.server.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_rejects_negative_price() {
        let figment = base().merge(Serialized::default("energy.price_per_kwh", -1.0));
        assert!(Config::from_figment(figment).is_err());
    }

    #[test]
    fn test_tariff_from_config() {
        let cfg = Config::from_figment(base()).unwrap();
        let tariff = cfg.energy.tariff();
        assert_eq!(tariff.price_per_kwh, 1.2);
        assert_eq!(tariff.co2_per_kwh, 0.017);
    }
}
