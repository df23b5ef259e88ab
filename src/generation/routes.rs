use geo::Point;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::geodesy::rhumb_destination;

/// Generates a synthetic route as a random walk: from a start position the
/// heading drifts by a bounded random bend at every step and each segment is
/// a fraction of `step_km` long. Useful for demos and benchmark input.
pub fn generate_synthetic_route(
    num_vertices: usize,
    start: Point<f64>,
    step_km: f64,
    max_bend_angle_degrees: f64,
) -> Vec<Point<f64>> {
    let mut rng = rand::thread_rng();
    walk(&mut rng, num_vertices, start, step_km, max_bend_angle_degrees)
}

// Seeded variant for deterministic benchmark input
pub fn generate_synthetic_route_seeded(
    num_vertices: usize,
    start: Point<f64>,
    step_km: f64,
    max_bend_angle_degrees: f64,
    seed: u64,
) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    walk(&mut rng, num_vertices, start, step_km, max_bend_angle_degrees)
}

fn walk<R: Rng>(
    rng: &mut R,
    num_vertices: usize,
    start: Point<f64>,
    step_km: f64,
    max_bend_angle_degrees: f64,
) -> Vec<Point<f64>> {
    let mut vertices = Vec::with_capacity(num_vertices);
    let mut current = start;
    let mut heading = rng.gen_range(0.0..360.0);
    vertices.push(current);

    for _ in 1..num_vertices {
        let bend = rng.gen_range(-max_bend_angle_degrees..=max_bend_angle_degrees);
        heading = (heading + bend).rem_euclid(360.0);
        current = rhumb_destination(current, heading, step_km * rng.gen_range(0.2..=1.0));
        vertices.push(current);
    }

    vertices
}
