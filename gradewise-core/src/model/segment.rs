//! Path segments and elevation samples supplied by the directions provider

use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::{Meters, Seconds, cost::accessibility_cost};

/// Elevation in meters at one point of an evenly sampled profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub elevation: f64,
}

impl ElevationSample {
    pub const fn new(elevation: f64) -> Self {
        Self { elevation }
    }
}

impl From<f64> for ElevationSample {
    fn from(elevation: f64) -> Self {
        Self { elevation }
    }
}

/// One directed step of a walking route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
    pub distance_meters: Meters,
    pub duration_seconds: Seconds,
    /// Penalty for physically traversing this segment, lower is better
    pub accessibility_cost: f64,
}

impl Segment {
    pub fn new(
        start: Coordinate,
        end: Coordinate,
        distance_meters: Meters,
        duration_seconds: Seconds,
        accessibility_cost: f64,
    ) -> Self {
        Self {
            start,
            end,
            distance_meters,
            duration_seconds,
            accessibility_cost,
        }
    }

    /// Segment priced from the elevation profile sampled along it
    pub fn from_elevation(
        start: Coordinate,
        end: Coordinate,
        distance_meters: Meters,
        duration_seconds: Seconds,
        profile: &[ElevationSample],
    ) -> Self {
        Self::new(
            start,
            end,
            distance_meters,
            duration_seconds,
            accessibility_cost(profile, distance_meters),
        )
    }

    /// Checks that the segment can be routed over without producing
    /// NaN or negative costs. Returns the reason on failure.
    pub(crate) fn check(&self) -> Result<(), String> {
        if !self.start.is_valid() {
            return Err(format!("start coordinate out of range {:?}", self.start));
        }
        if !self.end.is_valid() {
            return Err(format!("end coordinate out of range {:?}", self.end));
        }
        check_non_negative("distance", self.distance_meters)?;
        check_non_negative("duration", self.duration_seconds)?;
        check_non_negative("accessibility cost", self.accessibility_cost)
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be finite and non-negative, got {value}"))
    }
}
