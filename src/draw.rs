//! Floor plan and wall elevation drawings of an estimated bathroom.
//!
//! [`layout`] turns a [`crate::CalculationBundle`] into rectangles in surface
//! pixels, [`Renderer`] paints them onto any [`DrawSurface`].

pub mod color;
pub mod config;
pub mod layout;
pub mod recorder;
pub mod renderer;
pub mod surface;
pub mod svg;

pub use color::{Color, ColorJitter, NoJitter, RandomJitter};
pub use config::RenderConfig;
pub use layout::{FloorLayout, WallLayout, WallPanel, WallSide, floor_layout, wall_layout};
pub use recorder::{DrawCommand, RecordingSurface};
pub use renderer::{Renderer, View};
pub use surface::{DrawSurface, Font, TextAlign, TextStyle};
pub use svg::SvgSurface;
