use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::Serialize;

use crate::boxer::RouteBoxerResult;
use crate::geometry::Rectangle;

/// MultiPolygon-shaped interchange value: a type tag and one closed
/// five-point ring per box, coordinates as longitude/latitude pairs.
#[derive(Debug, Clone, Serialize)]
pub struct GeoJsonResult {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<Vec<Vec<Vec<f64>>>>,
}

/// Closed ring for one box: northwest, northeast, southeast, southwest and
/// back to the northwest corner.
fn box_ring(rect: &Rectangle) -> Vec<Vec<f64>> {
    let nw = rect.north_west();
    let ne = rect.north_east();
    let se = rect.south_east();
    let sw = rect.south_west();
    vec![
        vec![nw.x(), nw.y()],
        vec![ne.x(), ne.y()],
        vec![se.x(), se.y()],
        vec![sw.x(), sw.y()],
        vec![nw.x(), nw.y()],
    ]
}

impl RouteBoxerResult {
    /// Serializable MultiPolygon structure, one polygon of one ring per box.
    pub fn to_geojson(&self) -> GeoJsonResult {
        GeoJsonResult {
            geometry_type: "MultiPolygon".to_string(),
            coordinates: self.iter().map(|b| vec![box_ring(b)]).collect(),
        }
    }

    /// The same rings as a geojson crate geometry.
    pub fn to_multi_polygon(&self) -> Geometry {
        Geometry::new(Value::MultiPolygon(
            self.iter().map(|b| vec![box_ring(b)]).collect(),
        ))
    }

    /// One polygon Feature per box, handy for dumping straight into
    /// geojson.io next to the route being boxed.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .iter()
            .map(|b| Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Polygon(vec![box_ring(b)]))),
                id: None,
                properties: None,
                foreign_members: None,
            })
            .collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
