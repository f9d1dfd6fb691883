use tracing::debug;

use super::{
    heuristics::baseline_energy,
    improvements::adjust_heating,
    weights::surface_weights,
    AnalysisError,
};
use crate::domain::{EnergyAnalysis, EnergyFeatureType, House, Improvement, Tariff};

/// Appliances every household is assumed to run, in kWh per year.
const APPLIANCES: [(EnergyFeatureType, f64); 3] = [
    (EnergyFeatureType::Fridge, 470.0),
    (EnergyFeatureType::WashingMachine, 520.0),
    (EnergyFeatureType::ClothesDryer, 470.0),
];

const SHOWER_KWH: f64 = 2370.0;
const ENERGY_SAVER_SHOWER_KWH: f64 = 1100.0;

/// Builds the feature list of a house under a fixed tariff.
#[derive(Debug, Clone, Copy)]
pub struct EnergyCalculator {
    tariff: Tariff,
}

impl EnergyCalculator {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// Structural features first, then heating, then the fixed appliances.
    ///
    /// Features whose inputs are missing are left out. The only error is a
    /// broken surface weight invariant.
    pub fn analyze(&self, house: &House) -> Result<EnergyAnalysis, AnalysisError> {
        let mut analysis = EnergyAnalysis::default();
        let floors = house.floors_or_default();
        let is_apartment = house.is_apartment_or_default();

        if is_apartment {
            self.analyze_apartment(house, floors, &mut analysis)?;
        } else {
            self.analyze_standalone_house(house, floors, &mut analysis)?;
        }
        self.add_appliances(house, &mut analysis);

        debug!(
            is_apartment,
            floors,
            area = ?house.area,
            construction_year = ?house.construction_year,
            structural = analysis.features.iter().filter(|f| f.kind.is_structural()).count(),
            kinds = ?analysis.kinds(),
            "energy analysis complete"
        );
        Ok(analysis)
    }

    fn analyze_standalone_house(
        &self,
        house: &House,
        floors: u32,
        analysis: &mut EnergyAnalysis,
    ) -> Result<(), AnalysisError> {
        let weights = surface_weights(house.area, floors)?;
        let energy = baseline_energy(house.area, house.construction_year);

        if let (Some(weights), Some(energy)) = (weights, energy) {
            // Ceilings are priced with the floor share as well.
            let shares = [
                (EnergyFeatureType::Ceilings, weights.floor),
                (EnergyFeatureType::Floors, weights.floor),
                (EnergyFeatureType::Walls, weights.wall),
                (EnergyFeatureType::Windows, weights.window),
            ];
            for (kind, share) in shares {
                analysis.push(kind.create_feature(energy * share, self.tariff));
            }
        }

        let heating = energy
            .zip(house.area)
            .map(|(energy, area)| adjust_heating(energy, area, house));
        if let Some(heating) = heating {
            analysis.push(EnergyFeatureType::HeatingUnit.create_feature(heating, self.tariff));
        }

        Ok(())
    }

    /// Apartments bear no floor or ceiling losses and get no heating
    /// improvements applied.
    fn analyze_apartment(
        &self,
        house: &House,
        floors: u32,
        analysis: &mut EnergyAnalysis,
    ) -> Result<(), AnalysisError> {
        let weights = surface_weights(house.area, floors)?;
        let energy = baseline_energy(house.area, house.construction_year);

        if let (Some(weights), Some(energy)) = (weights, energy) {
            let energy = energy * weights.apartment_share();
            let shares = [
                (EnergyFeatureType::Walls, weights.wall),
                (EnergyFeatureType::Windows, weights.window),
                (EnergyFeatureType::HeatingUnit, 1.0),
            ];
            for (kind, share) in shares {
                analysis.push(kind.create_feature(energy * share, self.tariff));
            }
        }

        Ok(())
    }

    fn add_appliances(&self, house: &House, analysis: &mut EnergyAnalysis) {
        for (kind, energy) in APPLIANCES {
            analysis.push(kind.create_feature(energy, self.tariff));
        }

        let shower = if house.has_improvement(Improvement::Shower) {
            ENERGY_SAVER_SHOWER_KWH
        } else {
            SHOWER_KWH
        };
        analysis.push(EnergyFeatureType::Shower.create_feature(shower, self.tariff));
    }
}

/// Estimate the energy features of `house` at the given price and CO2 intensity.
pub fn analyze(
    house: &House,
    price_per_kwh: f64,
    co2_per_kwh: f64,
) -> Result<EnergyAnalysis, AnalysisError> {
    EnergyCalculator::new(Tariff::new(price_per_kwh, co2_per_kwh)).analyze(house)
}
