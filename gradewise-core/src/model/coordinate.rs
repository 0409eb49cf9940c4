//! Coordinates and canonical node identity

use std::fmt;

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::COORDINATE_SCALE;

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Finite and within ±90° latitude, ±180° longitude
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.lat.abs() <= 90.0 && self.lng.abs() <= 180.0
    }

    /// Canonical graph key for this position
    pub fn node_id(&self) -> NodeId {
        NodeId::from_coordinate(*self)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        Coordinate::new(value.y(), value.x())
    }
}

/// Graph node key: a coordinate rounded to six decimal places and stored as
/// a fixed-point integer pair.
///
/// Two coordinates that round to the same six-decimal value share a key,
/// any other pair of coordinates gets distinct keys. `0.0` and `-0.0` are
/// the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    lat_e6: i64,
    lng_e6: i64,
}

impl NodeId {
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self {
            lat_e6: to_fixed(coordinate.lat),
            lng_e6: to_fixed(coordinate.lng),
        }
    }

    /// The rounded coordinate this key stands for
    #[allow(clippy::cast_precision_loss)]
    pub fn to_coordinate(self) -> Coordinate {
        Coordinate::new(
            self.lat_e6 as f64 / COORDINATE_SCALE,
            self.lng_e6 as f64 / COORDINATE_SCALE,
        )
    }
}

impl From<Coordinate> for NodeId {
    fn from(value: Coordinate) -> Self {
        NodeId::from_coordinate(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coordinate = self.to_coordinate();
        write!(f, "{:.6},{:.6}", coordinate.lat, coordinate.lng)
    }
}

// Half-away-from-zero rounding; `as` saturates on out-of-range input
#[allow(clippy::cast_possible_truncation)]
fn to_fixed(value: f64) -> i64 {
    (value * COORDINATE_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_is_idempotent() {
        let coordinate = Coordinate::new(51.507_351_234, -0.127_758_9);
        let id = coordinate.node_id();

        assert_eq!(NodeId::from_coordinate(id.to_coordinate()), id);
    }

    #[test]
    fn test_sub_epsilon_difference_shares_key() {
        let a = Coordinate::new(40.712_776_01, -74.005_974_01);
        let b = Coordinate::new(40.712_776_04, -74.005_974_03);

        assert_eq!(a.node_id(), b.node_id());
    }

    #[test]
    fn test_distinct_rounded_coordinates_have_distinct_keys() {
        let a = Coordinate::new(40.712_776, -74.005_974);
        let b = Coordinate::new(40.712_777, -74.005_974);
        let c = Coordinate::new(40.712_776, -74.005_975);

        assert_ne!(a.node_id(), b.node_id());
        assert_ne!(a.node_id(), c.node_id());
        assert_ne!(b.node_id(), c.node_id());
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        assert_eq!(
            Coordinate::new(-0.0, 0.0).node_id(),
            Coordinate::new(0.0, -0.000_000_1).node_id()
        );
    }

    #[test]
    fn test_display_uses_six_decimals() {
        let id = Coordinate::new(1.5, -2.25).node_id();

        assert_eq!(id.to_string(), "1.500000,-2.250000");
    }

    #[test]
    fn test_point_conversion_swaps_axes() {
        let point: Point<f64> = Coordinate::new(10.0, 20.0).into();

        assert_eq!(point.x(), 20.0);
        assert_eq!(point.y(), 10.0);
        assert_eq!(Coordinate::from(point), Coordinate::new(10.0, 20.0));
    }
}
