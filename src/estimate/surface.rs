use super::{MM2_PER_M2, WASTE_ALLOWANCE};
use serde::{Serialize, Serializer};

/// Tile estimate for one surface (the floor, or all four walls together).
///
/// Areas are in square meters. `total_area` and `door_area` are only set
/// for the wall estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceResult {
    #[serde(serialize_with = "two_decimals")]
    pub area: f64,
    pub tiles_needed: i64,
    pub tiles_without_waste: i64,
    pub waste_allowance_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "two_decimals_opt")]
    pub total_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "two_decimals_opt")]
    pub door_area: Option<f64>,
}

impl SurfaceResult {
    /// Net area with two decimals, e.g. `"3.00"`.
    pub fn area_text(&self) -> String {
        format!("{:.2}", self.area)
    }

    pub fn total_area_text(&self) -> Option<String> {
        self.total_area.map(|a| format!("{a:.2}"))
    }

    pub fn door_area_text(&self) -> Option<String> {
        self.door_area.map(|a| format!("{a:.2}"))
    }

    /// Extra tiles added on top of the exact count.
    pub fn waste_tiles(&self) -> i64 {
        self.tiles_needed - self.tiles_without_waste
    }
}

fn two_decimals<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{value:.2}"))
}

fn two_decimals_opt<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => two_decimals(v, s),
        None => s.serialize_none(),
    }
}

/// Rounds the exact count up, then rounds the count with waste up again.
///
/// The two ceilings are kept separate so both numbers are whole tiles.
fn tile_counts(area: f64, tile_area: f64) -> (i64, i64) {
    let without_waste = (area / tile_area).ceil();
    let with_waste = (without_waste * (1. + WASTE_ALLOWANCE)).ceil();
    (without_waste as i64, with_waste as i64)
}

/// Floor estimate from room and tile dimensions in millimeters.
///
/// Expects positive values; see [`crate::estimate::validate`].
pub fn compute_floor(width: f64, length: f64, tile_width: f64, tile_length: f64) -> SurfaceResult {
    let floor_area = width * length / MM2_PER_M2;
    let tile_area = tile_width * tile_length / MM2_PER_M2;
    let (tiles_without_waste, tiles_needed) = tile_counts(floor_area, tile_area);

    log::debug!(
        "Floor {floor_area:.2} m2, tile {tile_area:.4} m2: {tiles_without_waste} tiles, {tiles_needed} with waste"
    );

    SurfaceResult {
        area: floor_area,
        tiles_needed,
        tiles_without_waste,
        waste_allowance_percent: WASTE_ALLOWANCE * 100.,
        total_area: None,
        door_area: None,
    }
}

/// Estimate for the four walls of a `width` x `length` room, minus one door.
///
/// The net area is not clamped: a door larger than the whole wall surface
/// gives a negative area and negative tile counts.
pub fn compute_wall(
    width: f64,
    length: f64,
    height: f64,
    tile_width: f64,
    tile_height: f64,
    door_width: f64,
    door_height: f64,
) -> SurfaceResult {
    let perimeter = 2. * (width + length);
    let total_area = perimeter * height / MM2_PER_M2;
    let door_area = door_width * door_height / MM2_PER_M2;
    let net_area = total_area - door_area;
    let tile_area = tile_width * tile_height / MM2_PER_M2;
    let (tiles_without_waste, tiles_needed) = tile_counts(net_area, tile_area);

    if net_area < 0. {
        log::warn!("Door area {door_area:.2} m2 exceeds wall area {total_area:.2} m2");
    }
    log::debug!(
        "Walls {net_area:.2} m2 net ({total_area:.2} total, {door_area:.2} door): \
         {tiles_without_waste} tiles, {tiles_needed} with waste"
    );

    SurfaceResult {
        area: net_area,
        tiles_needed,
        tiles_without_waste,
        waste_allowance_percent: WASTE_ALLOWANCE * 100.,
        total_area: Some(total_area),
        door_area: Some(door_area),
    }
}
