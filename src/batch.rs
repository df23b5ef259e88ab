use geo::Point;
use rayon::prelude::*;

use crate::boxer::{RouteBoxer, RouteBoxerResult};
use crate::error::Error;

/// Boxes many routes in parallel. Every route is an independent computation
/// with no shared state, so the batch splits cleanly across threads; failures
/// are reported per route instead of aborting the whole batch.
pub fn box_routes(
    routes: Vec<Vec<Point<f64>>>,
    distance_range_km: f64,
) -> Vec<Result<RouteBoxerResult, Error>> {
    routes
        .into_par_iter()
        .map(|route| RouteBoxer::new(route, distance_range_km).map(RouteBoxer::boxes))
        .collect()
}
