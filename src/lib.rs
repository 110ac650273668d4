pub mod cli;
pub mod draw;
pub mod estimate;
pub mod geom;
pub mod io;
pub mod report;

// Prelude
pub use draw::{DrawSurface, Renderer, View};
pub use estimate::{
    CalculationBundle, Field, RoomTileParams, SurfaceResult, ValidParams, ValidationError,
    WASTE_ALLOWANCE, compute_all, compute_floor, compute_wall, validate,
};
pub use geom::point::Point;
pub use geom::rect::Rect;
