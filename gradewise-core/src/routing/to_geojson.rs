use geo::{Coord, LineString, Point};
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::SearchResult;
use crate::Error;

impl SearchResult {
    /// Converts the path to a `GeoJSON` `Feature` carrying the route metrics
    /// as properties. A single-node path becomes a `Point`.
    pub fn to_geojson(&self) -> Result<Feature, Error> {
        let geometry = match self.path.as_slice() {
            [] => return Err(Error::GeoJsonError("search result has an empty path".into())),
            [only] => Geometry::new(GeoJsonValue::from(&Point::from(*only))),
            path => {
                let line: LineString<f64> = path.iter().map(|c| Coord::from(*c)).collect();
                Geometry::new(GeoJsonValue::from(&line))
            }
        };

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "total_time_minutes": self.total_time_minutes,
                "total_accessible_cost": self.total_accessible_cost,
                "total_distance_meters": self.total_distance_meters,
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    fn result(path: Vec<Coordinate>) -> SearchResult {
        SearchResult {
            path,
            total_time_minutes: 2.0,
            total_accessible_cost: 20.0,
            total_distance_meters: 150.0,
        }
    }

    #[test]
    fn test_line_feature() {
        let feature = result(vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)])
            .to_geojson()
            .expect("feature");

        let geometry = serde_json::to_value(&feature.geometry).expect("geometry json");
        assert_eq!(geometry["type"], "LineString");
        assert_eq!(geometry["coordinates"], json!([[2.0, 1.0], [4.0, 3.0]]));
        assert_eq!(
            feature
                .properties
                .as_ref()
                .and_then(|p| p.get("total_accessible_cost"))
                .and_then(serde_json::Value::as_f64),
            Some(20.0)
        );
    }

    #[test]
    fn test_single_node_is_a_point() {
        let feature = result(vec![Coordinate::new(1.0, 2.0)])
            .to_geojson()
            .expect("feature");

        assert!(matches!(
            feature.geometry.map(|g| g.value),
            Some(GeoJsonValue::Point(_))
        ));
    }

    #[test]
    fn test_empty_path_is_an_error() {
        assert!(matches!(
            result(Vec::new()).to_geojson(),
            Err(Error::GeoJsonError(_))
        ));
    }

    #[test]
    fn test_string_output() {
        let text = result(vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)])
            .to_geojson_string()
            .expect("string");

        assert!(text.contains("\"LineString\""));
    }
}
