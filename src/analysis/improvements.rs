use crate::domain::{House, Improvement};

const DAYS_PER_YEAR: f64 = 365.24;

#[derive(Debug, Clone, Copy)]
enum Effect {
    /// Daily yield per 60 m² of floor area, subtracted and floored at zero.
    AreaYield { kwh_per_day: f64 },
    /// Fixed daily saving, subtracted and floored at zero.
    Saving { kwh_per_day: f64 },
    Scale(f64),
}

impl Effect {
    fn apply(self, energy: f64, area: f64) -> f64 {
        match self {
            Effect::AreaYield { kwh_per_day } => {
                let benefit = area / 60.0 * kwh_per_day * DAYS_PER_YEAR;
                (energy - benefit).max(0.0)
            }
            Effect::Saving { kwh_per_day } => (energy - kwh_per_day * DAYS_PER_YEAR).max(0.0),
            Effect::Scale(factor) => energy * factor,
        }
    }
}

/// Applied in this order; each step sees the result of the previous one.
const HEATING_ADJUSTMENTS: [(Improvement, Effect); 4] = [
    (Improvement::SolarCells, Effect::AreaYield { kwh_per_day: 100.0 }),
    (Improvement::Geothermal, Effect::Saving { kwh_per_day: 1000.0 }),
    (Improvement::HeatExchangeUnit, Effect::Scale(0.5)),
    (Improvement::DistrictHeating, Effect::Scale(0.5)),
];

/// Heating energy left after the improvements installed in `house`.
///
/// `area` is the house's floor area; callers only get here with a baseline,
/// which already requires one.
pub fn adjust_heating(energy: f64, area: f64, house: &House) -> f64 {
    HEATING_ADJUSTMENTS
        .iter()
        .filter(|(improvement, _)| house.has_improvement(*improvement))
        .fold(energy, |acc, (_, effect)| effect.apply(acc, area))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn house_with(improvements: &[Improvement]) -> House {
        House {
            area: Some(3000.0),
            improvements: Some(improvements.iter().copied().collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_improvements_is_identity() {
        assert_eq!(adjust_heating(12345.0, 100.0, &House::default()), 12345.0);
    }

    #[rstest]
    #[case(&[Improvement::HeatExchangeUnit], 5000.0)]
    #[case(&[Improvement::DistrictHeating], 5000.0)]
    #[case(&[Improvement::HeatExchangeUnit, Improvement::DistrictHeating], 2500.0)]
    #[case(
        &[Improvement::WallIsolation, Improvement::Windows, Improvement::TargetedIsolation],
        10000.0
    )]
    #[case(&[Improvement::Shower], 10000.0)]
    fn test_multiplicative_steps(#[case] improvements: &[Improvement], #[case] expected: f64) {
        assert_eq!(adjust_heating(10000.0, 100.0, &house_with(improvements)), expected);
    }

    #[test]
    fn test_solar_cells_scale_with_area() {
        let house = house_with(&[Improvement::SolarCells]);
        let adjusted = adjust_heating(1_000_000.0, 60.0, &house);
        assert!((adjusted - (1_000_000.0 - 36524.0)).abs() < 1e-6);
    }

    #[test]
    fn test_subtractive_steps_floor_at_zero() {
        let house = house_with(&[Improvement::SolarCells, Improvement::Geothermal]);
        assert_eq!(adjust_heating(8000.0, 60.0, &house), 0.0);
    }

    #[test]
    fn test_geothermal_before_heat_exchanger() {
        let house = house_with(&[Improvement::HeatExchangeUnit, Improvement::Geothermal]);
        let adjusted = adjust_heating(400_000.0, 3000.0, &house);
        assert!((adjusted - (400_000.0 - 365_240.0) * 0.5).abs() < 1e-6);
    }
}
