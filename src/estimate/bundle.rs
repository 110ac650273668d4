use super::params::ValidParams;
use super::surface::{SurfaceResult, compute_floor, compute_wall};
use serde::Serialize;

/// Floor and wall estimates together with the measurements they came from.
///
/// This is everything the renderer needs for one drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationBundle {
    pub floor: SurfaceResult,
    pub wall: SurfaceResult,
    pub params: ValidParams,
}

/// Computes the floor and wall estimates for a validated room.
pub fn compute_all(params: &ValidParams) -> CalculationBundle {
    let floor = compute_floor(
        params.floor_width(),
        params.floor_length(),
        params.floor_tile_width(),
        params.floor_tile_length(),
    );
    let wall = compute_wall(
        params.floor_width(),
        params.floor_length(),
        params.wall_height(),
        params.wall_tile_width(),
        params.wall_tile_height(),
        params.door_width(),
        params.door_height(),
    );

    log::info!(
        "Estimated {} floor tiles and {} wall tiles",
        floor.tiles_needed,
        wall.tiles_needed
    );

    CalculationBundle {
        floor,
        wall,
        params: *params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{RoomTileParams, validate};

    #[test]
    fn test_compute_all() {
        let params = validate(&RoomTileParams::example()).unwrap();
        let bundle = compute_all(&params);
        assert_eq!(bundle.floor.tiles_needed, 38);
        assert_eq!(bundle.wall.tiles_needed, 335);
        assert_eq!(bundle.params, params);
    }

    #[test]
    fn test_bundle_value_equality() {
        let params = validate(&RoomTileParams::example()).unwrap();
        assert_eq!(compute_all(&params), compute_all(&params));
    }

    #[test]
    fn test_wall_uses_wall_tiles() {
        let mut raw = RoomTileParams::example();
        raw.floor_tile_width = Some(600.);
        raw.floor_tile_length = Some(600.);
        let bundle = compute_all(&validate(&raw).unwrap());
        assert_eq!(bundle.wall.tiles_without_waste, 304);
        // 3 m2 / 0.36 m2 = 8.33
        assert_eq!(bundle.floor.tiles_without_waste, 9);
    }
}
