//

pub mod batch;
pub mod boxer;
pub mod error;
pub mod export;
pub mod generation;
pub mod geodesy;
pub mod geometry;
