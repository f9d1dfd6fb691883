use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The type of an energy feature.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyFeatureType {
    Walls,
    Windows,
    Floors,
    Ceilings,
    HeatingUnit,
    Fridge,
    WashingMachine,
    ClothesDryer,
    Shower,
}

impl EnergyFeatureType {
    /// Price and score `energy_kwh` of this feature type under `tariff`.
    pub fn create_feature(self, energy_kwh: f64, tariff: Tariff) -> EnergyFeature {
        EnergyFeature {
            kind: self,
            energy: energy_kwh,
            expense: tariff.price_per_kwh * energy_kwh,
            pollution: tariff.co2_per_kwh * energy_kwh,
        }
    }

    pub fn is_structural(self) -> bool {
        match self {
            Self::Walls | Self::Windows | Self::Floors | Self::Ceilings => true,
            Self::HeatingUnit
            | Self::Fridge
            | Self::WashingMachine
            | Self::ClothesDryer
            | Self::Shower => false,
        }
    }
}

/// Price and CO2 intensity of one kWh, fixed for the duration of an analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    /// NOK per kWh
    pub price_per_kwh: f64,
    /// kg CO2 equivalents per kWh
    pub co2_per_kwh: f64,
}

impl Tariff {
    pub fn new(price_per_kwh: f64, co2_per_kwh: f64) -> Self {
        Self { price_per_kwh, co2_per_kwh }
    }
}

/// An aspect of the energy consumed by a house.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyFeature {
    #[serde(rename = "type")]
    pub kind: EnergyFeatureType,
    /// kWh per year
    pub energy: f64,
    /// NOK per year
    pub expense: f64,
    /// kg CO2 equivalents per year
    pub pollution: f64,
}

/// Analysis result: the features derived for one house, in emission order.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyAnalysis {
    pub features: Vec<EnergyFeature>,
}

impl EnergyAnalysis {
    pub fn push(&mut self, feature: EnergyFeature) {
        self.features.push(feature);
    }

    /// First feature of the given type, if one was emitted.
    pub fn feature(&self, kind: EnergyFeatureType) -> Option<&EnergyFeature> {
        self.features.iter().find(|f| f.kind == kind)
    }

    pub fn kinds(&self) -> Vec<EnergyFeatureType> {
        self.features.iter().map(|f| f.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
