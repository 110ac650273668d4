pub mod point;
pub mod rect;
pub mod tiling;

/// Geometric precision
const EPS: f64 = 1e-9;
