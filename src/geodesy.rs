use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use geo::Point;

/// Mean Earth radius in kilometers. Every distance in this crate is measured
/// against this constant, so distances in and out are consistently kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the point reached by travelling `distance_km` from `origin` on a
/// constant compass bearing (a rhumb line), using the isometric-latitude
/// relation between latitude change and bearing.
///
/// Latitude steps below 1e-10 radians are snapped to zero, the isometric
/// ratio is unstable for them. A latitude ending up past a pole is reflected
/// back across it, and the longitude is normalized into [-180, 180).
pub fn rhumb_destination(origin: Point<f64>, bearing_deg: f64, distance_km: f64) -> Point<f64> {
    let d = distance_km / EARTH_RADIUS_KM;
    let lat1 = origin.y().to_radians();
    let lng1 = origin.x().to_radians();
    let bearing = bearing_deg.to_radians();

    let mut d_lat = d * bearing.cos();
    if d_lat.abs() < 1e-10 {
        // sub-millimeter latitude step
        d_lat = 0.0;
    }

    let mut lat2 = lat1 + d_lat;
    if lat2.abs() > FRAC_PI_2 {
        lat2 = if lat2 > 0.0 { PI - lat2 } else { -PI - lat2 };
    }

    let d_phi = ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln();
    let q = if d_phi != 0.0 { d_lat / d_phi } else { lat1.cos() };
    let d_lng = d * bearing.sin() / q;

    let lng2 = (lng1 + d_lng + 3.0 * PI).rem_euclid(2.0 * PI) - PI;

    Point::new(lng2.to_degrees(), lat2.to_degrees())
}

/// Bearing from `from` to `to` along the rhumb line between them, in degrees
/// normalized to [0, 360).
pub fn rhumb_bearing(from: Point<f64>, to: Point<f64>) -> f64 {
    let mut d_lng = (to.x() - from.x()).to_radians();
    let d_phi = ((to.y().to_radians() / 2.0 + FRAC_PI_4).tan()
        / (from.y().to_radians() / 2.0 + FRAC_PI_4).tan())
    .ln();

    // Take the short way around rather than crossing more than half the globe
    if d_lng.abs() > PI {
        d_lng = if d_lng > 0.0 {
            -(2.0 * PI - d_lng)
        } else {
            2.0 * PI + d_lng
        };
    }

    d_lng.atan2(d_phi).to_degrees().rem_euclid(360.0)
}
