//! Tile estimation: input validation and area/tile-count arithmetic.
//!
//! All measurements enter in millimeters and areas come out in square meters.
//! Computation only accepts [`ValidParams`], which can only be obtained from
//! [`validate`], so a zero tile area never reaches a division.

pub mod bundle;
pub mod params;
pub mod surface;

pub use bundle::{CalculationBundle, compute_all};
pub use params::{
    Field, RoomTileParams, ValidParams, ValidationError, ValidationReport,
    is_positive_measurement, validate,
};
pub use surface::{SurfaceResult, compute_floor, compute_wall};

/// Fraction of extra tiles added for cutting loss and breakage.
pub const WASTE_ALLOWANCE: f64 = 0.10;

/// Square millimeters in one square meter.
pub const MM2_PER_M2: f64 = 1_000_000.0;
