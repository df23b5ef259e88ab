pub mod routes;

pub use routes::{generate_synthetic_route, generate_synthetic_route_seeded};
