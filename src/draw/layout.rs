//! Placement of the floor plan and the wall panels on a surface.
//!
//! Everything here is plain geometry in surface pixels; nothing is drawn.

use crate::draw::config::RenderConfig;
use crate::estimate::ValidParams;
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use crate::geom::tiling::tile_grid;

/// Scaled floor plan centered on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorLayout {
    /// Pixels per millimeter.
    pub scale: f64,
    pub room: Rect,
    pub tiles: Vec<Rect>,
}

/// Fits the whole floor inside the padded surface, keeping its aspect ratio.
pub fn floor_layout(
    params: &ValidParams,
    surface_width: f64,
    surface_height: f64,
    config: &RenderConfig,
) -> FloorLayout {
    let available_width = surface_width - config.floor_padding * 2.;
    let available_height = surface_height - config.floor_padding * 2.;
    let scale = (available_width / params.floor_width()).min(available_height / params.floor_length());

    let width = params.floor_width() * scale;
    let length = params.floor_length() * scale;
    let origin = Point::new((surface_width - width) / 2., (surface_height - length) / 2.);

    let tiles = tile_grid(
        origin,
        width,
        length,
        params.floor_tile_width() * scale,
        params.floor_tile_length() * scale,
    );

    FloorLayout {
        scale,
        room: Rect::at(origin, width, length),
        tiles,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Front,
    Left,
    Back,
    Right,
}

impl WallSide {
    /// Grid order: top-left, top-right, bottom-left, bottom-right.
    pub const ALL: [WallSide; 4] = [WallSide::Front, WallSide::Left, WallSide::Back, WallSide::Right];

    pub fn label(&self) -> &'static str {
        match self {
            WallSide::Front => "Front Wall (with door)",
            WallSide::Left => "Left Wall",
            WallSide::Back => "Back Wall",
            WallSide::Right => "Right Wall",
        }
    }

    /// The door is always in the front wall.
    pub fn has_door(&self) -> bool {
        matches!(self, WallSide::Front)
    }

    /// Front and back walls span the floor width, the side walls its length.
    pub fn real_width(&self, params: &ValidParams) -> f64 {
        match self {
            WallSide::Front | WallSide::Back => params.floor_width(),
            WallSide::Left | WallSide::Right => params.floor_length(),
        }
    }

    /// (column, row) in the 2x2 grid.
    fn cell(&self) -> (usize, usize) {
        match self {
            WallSide::Front => (0, 0),
            WallSide::Left => (1, 0),
            WallSide::Back => (0, 1),
            WallSide::Right => (1, 1),
        }
    }
}

/// One wall drawn as an elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPanel {
    pub side: WallSide,
    /// Pixels per millimeter.
    pub scale: f64,
    /// Real wall size in millimeters.
    pub real_width: f64,
    pub real_height: f64,
    pub rect: Rect,
    pub tiles: Vec<Rect>,
    pub door: Option<Rect>,
}

/// Four wall panels in a 2x2 grid.
#[derive(Debug, Clone, PartialEq)]
pub struct WallLayout {
    pub cell_width: f64,
    pub cell_height: f64,
    pub panels: [WallPanel; 4],
}

impl WallLayout {
    pub fn panel(&self, side: WallSide) -> &WallPanel {
        // ALL and panels share the same order
        &self.panels[WallSide::ALL.iter().position(|s| *s == side).unwrap_or_default()]
    }
}

/// Scale that fits a `width` x `height` wall into a grid cell, capped at `cap`.
pub fn wall_scale(width: f64, height: f64, cell_width: f64, cell_height: f64, cap: f64) -> f64 {
    (cell_width / width).min(cell_height / height).min(cap)
}

pub fn wall_layout(
    params: &ValidParams,
    surface_width: f64,
    surface_height: f64,
    config: &RenderConfig,
) -> WallLayout {
    let pad = config.wall_padding;
    let gap = config.wall_gap;
    let cell_width = (surface_width - pad * 2. - gap) / 2.;
    let cell_height = (surface_height - pad * 2. - gap - config.wall_title_reserve) / 2.;

    let panels = WallSide::ALL.map(|side| {
        let real_width = side.real_width(params);
        let real_height = params.wall_height();
        // Opposite walls have the same size and so the same scale
        let scale = wall_scale(
            real_width,
            real_height,
            cell_width,
            cell_height,
            config.wall_scale_cap,
        );

        let (col, row) = side.cell();
        let origin = Point::new(
            pad + col as f64 * (cell_width + gap),
            pad + row as f64 * (cell_height + gap) + config.wall_title_offset,
        );
        let rect = Rect::at(origin, real_width * scale, real_height * scale);
        let tiles = tile_grid(
            origin,
            rect.width,
            rect.height,
            params.wall_tile_width() * scale,
            params.wall_tile_height() * scale,
        );

        let door = side.has_door().then(|| {
            let door_width = params.door_width() * scale;
            let door_height = params.door_height() * scale;
            Rect::new(
                rect.x + (rect.width - door_width) / 2.,
                rect.y + rect.height - door_height,
                door_width,
                door_height,
            )
        });

        WallPanel {
            side,
            scale,
            real_width,
            real_height,
            rect,
            tiles,
            door,
        }
    });

    WallLayout {
        cell_width,
        cell_height,
        panels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{RoomTileParams, validate};

    fn params() -> ValidParams {
        validate(&RoomTileParams::example()).unwrap()
    }

    #[test]
    fn test_floor_scale_keeps_aspect() {
        let config = RenderConfig::new();
        let layout = floor_layout(&params(), 1000., 600., &config);
        // min(840 / 2000, 440 / 1500)
        assert!((layout.scale - 440. / 1500.).abs() < 1e-12);
        assert!((layout.room.width / layout.room.height - 2000. / 1500.).abs() < 1e-9);
        assert!((layout.room.height - 440.).abs() < 1e-9);
        // Centered
        assert!(layout.room.center().is_close(&Point::new(500., 300.)));
    }

    #[test]
    fn test_floor_tiles_cover_room() {
        let config = RenderConfig::new();
        let layout = floor_layout(&params(), 1000., 600., &config);
        // 2000/300 -> 7 columns, 1500/300 -> 5 rows
        assert_eq!(layout.tiles.len(), 35);
        let area: f64 = layout.tiles.iter().map(|t| t.area()).sum();
        assert!((area - layout.room.area()).abs() < 1e-6);
        assert!(layout.tiles.iter().all(|t| layout.room.contains_rect(t)));
    }

    #[test]
    fn test_wall_scale_cap() {
        assert_eq!(wall_scale(100., 100., 1000., 1000., 0.3), 0.3);
        assert_eq!(wall_scale(1000., 2000., 100., 100., 0.3), 0.05);
        assert_eq!(wall_scale(1000., 100., 100., 100., 0.3), 0.1);
    }

    #[test]
    fn test_wall_panels() {
        let config = RenderConfig::new();
        let layout = wall_layout(&params(), 1000., 600., &config);
        let front = layout.panel(WallSide::Front);
        let back = layout.panel(WallSide::Back);
        let left = layout.panel(WallSide::Left);
        assert_eq!(front.scale, back.scale);
        assert_eq!(left.scale, layout.panel(WallSide::Right).scale);
        assert_eq!(front.real_width, 2000.);
        assert_eq!(left.real_width, 1500.);

        for p in &layout.panels {
            assert!(p.scale <= config.wall_scale_cap);
            assert!(p.rect.width <= layout.cell_width + 1e-9);
            assert!(p.rect.height <= layout.cell_height + 1e-9);
        }
    }

    #[test]
    fn test_only_front_has_door() {
        let layout = wall_layout(&params(), 1000., 600., &RenderConfig::new());
        let with_door: Vec<WallSide> = layout
            .panels
            .iter()
            .filter(|p| p.door.is_some())
            .map(|p| p.side)
            .collect();
        assert_eq!(with_door, vec![WallSide::Front]);

        let front = layout.panel(WallSide::Front);
        let door = front.door.unwrap();
        // Centered and standing on the bottom edge
        assert!((door.center().x - front.rect.center().x).abs() < 1e-9);
        assert!((door.max().y - front.rect.max().y).abs() < 1e-9);
        assert!((door.width - 800. * front.scale).abs() < 1e-9);
        assert!(front.rect.contains_rect(&door));
    }

    fn huge_room() -> ValidParams {
        let mut raw = RoomTileParams::example();
        raw.floor_width = Some(1e9);
        raw.floor_length = Some(1e9);
        raw.wall_height = Some(1e9);
        for field in [
            &mut raw.floor_tile_width,
            &mut raw.floor_tile_length,
            &mut raw.wall_tile_width,
            &mut raw.wall_tile_height,
        ] {
            *field = Some(1.);
        }
        validate(&raw).unwrap()
    }

    #[test]
    fn test_huge_room_floor_is_one_tile() {
        let layout = floor_layout(&huge_room(), 1000., 600., &RenderConfig::new());
        assert_eq!(layout.tiles, vec![layout.room]);
    }

    #[test]
    fn test_huge_room_walls_are_one_tile_each() {
        let layout = wall_layout(&huge_room(), 1000., 600., &RenderConfig::new());
        for p in &layout.panels {
            assert_eq!(p.tiles, vec![p.rect]);
        }
    }

    #[test]
    fn test_large_surface_hits_cap() {
        let layout = wall_layout(&params(), 10_000., 10_000., &RenderConfig::new());
        assert!(layout.panels.iter().all(|p| p.scale == 0.3));
    }
}
