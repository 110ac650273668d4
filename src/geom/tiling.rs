//! Clipped rectangular tiling of a surface.

use crate::geom::EPS;
use crate::geom::point::Point;
use crate::geom::rect::Rect;

/// Largest number of tiles [`tile_grid`] builds before falling back to a
/// single rectangle.
pub const MAX_TILES: usize = 1_000_000;

/// Covers a `width` x `height` surface with `tile_width` x `tile_height` tiles.
///
/// Tiles start at `origin` and run column by column. Tiles in the last
/// column and row are clipped to the remaining width/height, so the tiles
/// cover the surface exactly. Returns no tiles if a tile size is not positive.
/// A grid of more than [`MAX_TILES`] tiles is replaced by one rectangle
/// covering the whole surface.
pub fn tile_grid(
    origin: Point,
    width: f64,
    height: f64,
    tile_width: f64,
    tile_height: f64,
) -> Vec<Rect> {
    if !(tile_width > 0. && tile_height > 0.) {
        return Vec::new();
    }

    let cols = grid_steps(width, tile_width);
    let rows = grid_steps(height, tile_height);
    let count = match cols.checked_mul(rows) {
        Some(n) if n <= MAX_TILES => n,
        _ => {
            log::debug!("Tile grid of {cols}x{rows} is over budget, drawing a single tile");
            return vec![Rect::at(origin, width, height)];
        }
    };
    let mut tiles = Vec::with_capacity(count);

    for i in 0..cols {
        let x = i as f64 * tile_width;
        let w = tile_width.min(width - x);
        for j in 0..rows {
            let y = j as f64 * tile_height;
            let h = tile_height.min(height - y);
            tiles.push(Rect::new(origin.x + x, origin.y + y, w, h));
        }
    }

    tiles
}

/// Number of grid positions `k * step` that fall strictly inside `0..length`.
fn grid_steps(length: f64, step: f64) -> usize {
    if length <= 0. {
        return 0;
    }
    let mut n = (length / step).ceil() as usize;
    // Drop a last position that would only produce a rounding sliver
    while n > 1 && (n - 1) as f64 * step >= length - EPS {
        n -= 1;
    }
    n
}
