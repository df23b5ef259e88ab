use geo::Point;
use geojson::{Feature, GeoJson, Geometry, Value};

use route_boxer::boxer::box_route;
use route_boxer::generation::generate_synthetic_route;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let route = generate_synthetic_route(50, Point::new(9.0, 50.0), 2.0, 45.0);
    let result = box_route(route.clone(), 5.0)?;

    // Route and boxes in one collection, ready to paste into geojson.io
    let mut output = result.to_feature_collection();
    output.features.push(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(
            route.iter().map(|p| vec![p.x(), p.y()]).collect(),
        ))),
        id: None,
        properties: None,
        foreign_members: None,
    });

    println!("{}", GeoJson::from(output));
    Ok(())
}
