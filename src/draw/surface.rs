use crate::draw::color::Color;
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use serde::{Deserialize, Serialize};

/// Horizontal anchor of a text relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Size in pixels.
    pub size: f64,
    #[serde(default)]
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub align: TextAlign,
    pub color: Color,
}

/// Immediate-mode 2D drawing target measured in pixels.
///
/// Coordinates go through the current transform, which `translate` and
/// `rotate` modify and `save`/`restore` push and pop.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    /// Changes the surface size. The content is cleared.
    fn resize(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64);
    /// Draws `text` with its baseline at `at`.
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    /// Rotates by `angle` radians, clockwise on screen.
    fn rotate(&mut self, angle: f64);
}
