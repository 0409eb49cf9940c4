//! Accessibility cost of a path from its elevation profile.
//!
//! Two barriers are priced: cumulative uphill effort, linear in meters
//! climbed, and the steepest grade between consecutive samples, which is
//! free up to 5% and heavily penalized above it.

use itertools::Itertools;
use log::{trace, warn};
use serde::Serialize;

use crate::{Meters, model::ElevationSample};

/// Cost assumed when the profile has too few samples to measure anything
pub const INSUFFICIENT_DATA_PENALTY: f64 = 500.0;
/// Cost per meter of uphill climb
pub const CLIMB_PENALTY_PER_METER: f64 = 5.0;
/// Grades up to this percentage carry no steepness penalty
pub const STEEPNESS_THRESHOLD_PERCENT: f64 = 5.0;
/// Cost per percentage point of grade above the threshold
pub const STEEPNESS_PENALTY_PER_PERCENT: f64 = 50.0;

/// Components of an accessibility cost
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CostBreakdown {
    pub uphill_climb_meters: f64,
    pub max_steepness_percent: f64,
    pub base_penalty: f64,
    pub steepness_penalty: f64,
    /// The profile could not be measured and the flat baseline was used
    pub insufficient_data: bool,
}

impl CostBreakdown {
    /// Prices a profile whose samples are evenly spaced over
    /// `total_distance_meters`.
    pub fn from_profile(samples: &[ElevationSample], total_distance_meters: Meters) -> Self {
        if samples.len() < 2 {
            trace!(
                "Elevation profile has {} samples, using baseline penalty",
                samples.len()
            );
            return Self::insufficient_data();
        }
        if !(total_distance_meters.is_finite() && total_distance_meters > 0.0) {
            warn!(
                "Elevation profile over non-positive distance ({total_distance_meters} m), \
                using baseline penalty"
            );
            return Self::insufficient_data();
        }
        if samples.iter().any(|sample| !sample.elevation.is_finite()) {
            warn!("Elevation profile contains non-finite samples, using baseline penalty");
            return Self::insufficient_data();
        }

        #[allow(clippy::cast_precision_loss)]
        let spacing = total_distance_meters / (samples.len() - 1) as f64;

        let (uphill_climb_meters, max_steepness_percent) = samples.iter().tuple_windows().fold(
            (0.0_f64, 0.0_f64),
            |(climb, steepness), (prev, next)| {
                let delta = next.elevation - prev.elevation;
                (
                    climb + delta.max(0.0),
                    steepness.max(delta.abs() / spacing * 100.0),
                )
            },
        );

        let steepness_penalty = if max_steepness_percent > STEEPNESS_THRESHOLD_PERCENT {
            (max_steepness_percent - STEEPNESS_THRESHOLD_PERCENT) * STEEPNESS_PENALTY_PER_PERCENT
        } else {
            0.0
        };

        Self {
            uphill_climb_meters,
            max_steepness_percent,
            base_penalty: uphill_climb_meters * CLIMB_PENALTY_PER_METER,
            steepness_penalty,
            insufficient_data: false,
        }
    }

    fn insufficient_data() -> Self {
        Self {
            base_penalty: INSUFFICIENT_DATA_PENALTY,
            insufficient_data: true,
            ..Self::default()
        }
    }

    pub fn total(&self) -> f64 {
        self.base_penalty + self.steepness_penalty
    }
}

/// Accessibility cost of a path, unbounded above. Higher is worse.
pub fn accessibility_cost(samples: &[ElevationSample], total_distance_meters: Meters) -> f64 {
    CostBreakdown::from_profile(samples, total_distance_meters).total()
}
