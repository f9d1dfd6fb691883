//! Calibrated linear heuristics turning house attributes into annual energy use.

use super::interpolate::lerp;

const REFERENCE_OLD_YEAR: f64 = 1993.0;
const REFERENCE_OLD_KWH: f64 = 18000.0;
const REFERENCE_NEW_YEAR: f64 = 2015.0;
const REFERENCE_NEW_KWH: f64 = 16000.0;

const SMALL_AREA_M2: f64 = 120.0;
const SMALL_AREA_KWH: f64 = 16000.0;
const LARGE_AREA_M2: f64 = 300.0;
const LARGE_AREA_KWH: f64 = 40000.0;

const APARTMENT_FACTOR: f64 = 0.5;

/// Relative energy use by construction year, 1.0 for a house built in 2015.
///
/// Extrapolates linearly outside 1993..=2015.
pub fn year_factor(year: i32) -> f64 {
    let t = (f64::from(year) - REFERENCE_OLD_YEAR) / (REFERENCE_NEW_YEAR - REFERENCE_OLD_YEAR);
    lerp(REFERENCE_OLD_KWH / REFERENCE_NEW_KWH, 1.0, t)
}

/// Annual kWh by floor area. Apartments use half of a standalone house.
pub fn area_factor(area: f64, is_apartment: bool) -> f64 {
    let type_factor = if is_apartment { APARTMENT_FACTOR } else { 1.0 };
    let t = (area - SMALL_AREA_M2) / (LARGE_AREA_M2 - SMALL_AREA_M2);
    type_factor * lerp(SMALL_AREA_KWH, LARGE_AREA_KWH, t)
}

/// Pre-improvement annual kWh, or `None` without an area.
///
/// Always evaluated as a standalone house. Apartments get their reduction
/// from the surface share applied by the apartment path instead.
pub fn baseline_energy(area: Option<f64>, construction_year: Option<i32>) -> Option<f64> {
    area.map(|area| {
        let by_area = area_factor(area, false);
        construction_year.map_or(by_area, |year| by_area * year_factor(year))
    })
}
