use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// An improvement installed in a house or apartment.
///
/// `WallIsolation`, `TargetedIsolation` and `Windows` are accepted and stored
/// but have no numeric effect on the analysis yet.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Improvement {
    HeatExchangeUnit,
    WallIsolation,
    TargetedIsolation,
    Windows,
    SolarCells,
    Geothermal,
    DistrictHeating,
    /// Energy saving shower head
    Shower,
}

/// Largest floor area accepted from callers.
pub const MAX_AREA_M2: f64 = 1_000_000.0;

/// A house record as supplied by the caller.
///
/// Every attribute is optional. `floors` is treated as 1 and `is_apartment`
/// as false when absent; the record itself is never rewritten.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// The area of the house in square meters, at most one square kilometre
    #[validate(range(exclusive_min = 0.0, max = MAX_AREA_M2))]
    pub area: Option<f64>,
    /// The number of floors in the house
    #[validate(range(min = 1))]
    pub floors: Option<u32>,
    /// The year the house was constructed
    pub construction_year: Option<i32>,
    /// The energy grade of the house
    pub energy_grade: Option<String>,
    /// The municipality number of the address for the house
    pub municipality_number: Option<String>,
    /// Treat the dwelling as an apartment, which drops floor and ceiling losses
    pub is_apartment: Option<bool>,
    /// Improvements made to the house
    pub improvements: Option<BTreeSet<Improvement>>,
    /// Opaque caller data, stored as-is
    #[cfg_attr(feature = "swagger", schema(ignore))]
    pub data: Option<String>,
}

impl House {
    pub fn floors_or_default(&self) -> u32 {
        self.floors.unwrap_or(1)
    }

    pub fn is_apartment_or_default(&self) -> bool {
        self.is_apartment.unwrap_or(false)
    }

    pub fn has_improvement(&self, improvement: Improvement) -> bool {
        self.improvements
            .as_ref()
            .is_some_and(|set| set.contains(&improvement))
    }
}
