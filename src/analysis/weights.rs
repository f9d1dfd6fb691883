use super::AnalysisError;

const FLOOR_HEIGHT_M: f64 = 2.6;
const WALL_FRACTION: f64 = 0.3;
const WINDOW_FRACTION: f64 = 0.7;
const WEIGHT_TOLERANCE: f64 = 0.0001;

/// Share of envelope heat loss attributed to each surface. Sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceWeights {
    pub roof: f64,
    pub floor: f64,
    pub window: f64,
    pub wall: f64,
}

impl SurfaceWeights {
    /// Weights for a square box of `floors` stories covering `area` m² in total.
    ///
    /// Floor and roof are counted twice their footprint. The perimeter is 30%
    /// opaque wall and 70% window.
    ///
    /// Sizes are taken relative to the footprint so that very large areas
    /// stay finite.
    pub fn compute(area: f64, floors: u32) -> Result<Self, AnalysisError> {
        let floors = f64::from(floors);
        let footprint = area / floors;
        let wall_length = footprint.sqrt();
        let wall_height = floors * FLOOR_HEIGHT_M;
        let perimeter_ratio = 4.0 * wall_height * wall_length / footprint;

        let floor_size = 2.0;
        let roof_size = 2.0;
        let wall_size = WALL_FRACTION * perimeter_ratio;
        let window_size = WINDOW_FRACTION * perimeter_ratio;
        let surface = floor_size + roof_size + wall_size + window_size;

        let weights = Self {
            roof: roof_size / surface,
            floor: floor_size / surface,
            window: window_size / surface,
            wall: wall_size / surface,
        };

        let sum = weights.sum();
        // NaN fails this comparison too
        if !((sum - 1.0).abs() <= WEIGHT_TOLERANCE) {
            return Err(AnalysisError::InvalidWeights { sum });
        }

        Ok(weights)
    }

    pub fn sum(&self) -> f64 {
        self.roof + self.floor + self.window + self.wall
    }

    /// Fraction of the baseline an apartment keeps once floor and ceiling
    /// losses to neighbouring units are removed.
    ///
    /// The window share appears twice in the denominator; downstream pricing
    /// is calibrated against this exact ratio.
    pub fn apartment_share(&self) -> f64 {
        (self.wall + self.window) / (self.window + self.floor + self.wall + self.window)
    }
}

/// Surface weights, or `None` without an area.
pub fn surface_weights(
    area: Option<f64>,
    floors: u32,
) -> Result<Option<SurfaceWeights>, AnalysisError> {
    area.map(|area| SurfaceWeights::compute(area, floors)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_floor_weights() {
        let w = SurfaceWeights::compute(60.0, 1).unwrap();
        let perimeter = 4.0 * 2.6 * 60f64.sqrt();
        let surface = 240.0 + perimeter;
        assert!((w.floor - 120.0 / surface).abs() < 1e-12);
        assert_eq!(w.floor, w.roof);
        assert!((w.window / w.wall - 0.7 / 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_more_floors_shift_loss_to_walls() {
        let low = SurfaceWeights::compute(200.0, 1).unwrap();
        let tall = SurfaceWeights::compute(200.0, 3).unwrap();
        assert!(tall.wall > low.wall);
        assert!(tall.floor < low.floor);
    }

    #[test]
    fn test_degenerate_inputs_violate_invariant() {
        assert!(matches!(
            SurfaceWeights::compute(60.0, 0),
            Err(AnalysisError::InvalidWeights { .. })
        ));
        assert!(SurfaceWeights::compute(0.0, 1).is_err());
        assert!(SurfaceWeights::compute(-10.0, 1).is_err());
    }

    #[test]
    fn test_extreme_areas_stay_finite() {
        for (area, floors) in [(1e308, 1), (f64::MAX, 1), (f64::MAX, u32::MAX), (1e-300, 1)] {
            let w = SurfaceWeights::compute(area, floors).unwrap();
            assert!((w.sum() - 1.0).abs() <= 1e-4, "area {area}, floors {floors}");
        }
    }

    #[test]
    fn test_absent_area_gives_no_weights() {
        assert_eq!(surface_weights(None, 2).unwrap(), None);
        assert!(surface_weights(Some(80.0), 2).unwrap().is_some());
    }

    #[test]
    fn test_apartment_share_excludes_floor_and_roof() {
        let w = SurfaceWeights::compute(60.0, 1).unwrap();
        let expected = (w.wall + w.window) / (2.0 * w.window + w.floor + w.wall);
        assert!((w.apartment_share() - expected).abs() < 1e-12);
        assert!(w.apartment_share() > 0.0 && w.apartment_share() < 1.0);
    }

    proptest! {
        #[test]
        fn prop_weights_sum_to_one(area in 0.5f64..10_000.0, floors in 1u32..50) {
            let w = SurfaceWeights::compute(area, floors).unwrap();
            prop_assert!((w.sum() - 1.0).abs() <= 1e-4);
            prop_assert!(w.roof > 0.0 && w.floor > 0.0 && w.wall > 0.0 && w.window > 0.0);
        }
    }
}
