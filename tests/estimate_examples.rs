use tilecalc::estimate::{RoomTileParams, WASTE_ALLOWANCE};
use tilecalc::io::params_from_str;
use tilecalc::{compute_all, compute_floor, compute_wall, validate};

fn room(
    floor: (f64, f64),
    floor_tile: (f64, f64),
    wall_height: f64,
    wall_tile: (f64, f64),
    door: (f64, f64),
) -> RoomTileParams {
    RoomTileParams {
        floor_width: Some(floor.0),
        floor_length: Some(floor.1),
        floor_tile_width: Some(floor_tile.0),
        floor_tile_length: Some(floor_tile.1),
        wall_height: Some(wall_height),
        wall_tile_width: Some(wall_tile.0),
        wall_tile_height: Some(wall_tile.1),
        door_width: Some(door.0),
        door_height: Some(door.1),
    }
}

#[test]
fn example_bathroom_end_to_end() {
    let json = r#"{
        "floorWidth": 2000, "floorLength": 1500,
        "floorTileWidth": 300, "floorTileLength": 300,
        "wallHeight": 2400, "wallTileWidth": 200, "wallTileHeight": 250,
        "doorWidth": 800, "doorHeight": 2000
    }"#;
    let params = params_from_str(json).unwrap();
    let report = params.report();
    assert!(report.is_valid);
    assert!(report.errors.is_empty());

    let bundle = compute_all(&validate(&params).unwrap());

    assert_eq!(bundle.floor.area_text(), "3.00");
    assert_eq!(bundle.floor.tiles_without_waste, 34);
    assert_eq!(bundle.floor.tiles_needed, 38);

    assert_eq!(bundle.wall.total_area_text().unwrap(), "16.80");
    assert_eq!(bundle.wall.door_area_text().unwrap(), "1.60");
    assert_eq!(bundle.wall.area_text(), "15.20");
    assert_eq!(bundle.wall.tiles_without_waste, 304);
    assert_eq!(bundle.wall.tiles_needed, 335);
}

#[test]
fn waste_is_two_rounded_steps() {
    let rooms = [
        room((2000., 1500.), (300., 300.), 2400., (200., 250.), (800., 2000.)),
        room((1234., 987.), (333., 333.), 2650., (150., 75.), (700., 2100.)),
        room((3100., 2750.), (600., 300.), 2200., (300., 600.), (900., 2000.)),
        room((900., 900.), (100., 100.), 1000., (100., 100.), (600., 900.)),
    ];
    for params in rooms {
        let valid = validate(&params).expect("valid room");
        let bundle = compute_all(&valid);
        for res in [bundle.floor, bundle.wall] {
            assert!(res.tiles_needed >= res.tiles_without_waste);
            let expected = (res.tiles_without_waste as f64 * (1. + WASTE_ALLOWANCE)).ceil() as i64;
            assert_eq!(res.tiles_needed, expected);
        }
        let floor_area = valid.floor_width() * valid.floor_length() / 1e6;
        let tile_area = valid.floor_tile_width() * valid.floor_tile_length() / 1e6;
        assert_eq!(
            bundle.floor.tiles_without_waste,
            (floor_area / tile_area).ceil() as i64
        );
    }
}

#[test]
fn nineteen_tiles_need_twenty_one() {
    let res = compute_floor(1900., 1000., 100., 1000.);
    assert_eq!(res.tiles_without_waste, 19);
    assert_eq!(res.tiles_needed, 21);
}

#[test]
fn validation_reports_every_problem() {
    let mut params = RoomTileParams::example();
    params.floor_tile_width = Some(0.);
    params.door_height = Some(3000.);
    let err = validate(&params).unwrap_err();
    assert!(err.errors.len() >= 2);
    assert!(err.errors.iter().any(|e| e.contains("floorTileWidth")));
    assert!(err.errors.iter().any(|e| e.contains("Door height")));
    assert!(err.to_string().starts_with("invalid room parameters"));
}

#[test]
fn net_wall_area_is_not_clamped() {
    // 600 x 400 room with 300 mm walls: 0.60 m2 of wall, 0.18 m2 of door
    let params = room((600., 400.), (100., 100.), 300., (100., 100.), (600., 300.));
    let bundle = compute_all(&validate(&params).unwrap());
    assert_eq!(bundle.wall.area_text(), "0.42");
    assert_eq!(bundle.wall.tiles_without_waste, 42);
    assert_eq!(bundle.wall.tiles_needed, 47);

    // Without validation a door taller than the walls can outgrow them
    let res = compute_wall(600., 400., 100., 100., 100., 600., 600.);
    assert_eq!(res.area_text(), "-0.16");
    assert!(res.tiles_without_waste < 0);
}
