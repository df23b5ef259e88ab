use thiserror::Error;

// Define error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("route must contain at least one point")]
    EmptyRoute,
    #[error("distance range must be a positive number of kilometers, got {0}")]
    NonPositiveDistance(f64),
}
