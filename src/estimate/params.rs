use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The nine measurements describing a bathroom and its tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FloorWidth,
    FloorLength,
    FloorTileWidth,
    FloorTileLength,
    WallHeight,
    WallTileWidth,
    WallTileHeight,
    DoorWidth,
    DoorHeight,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 9] = [
        Field::FloorWidth,
        Field::FloorLength,
        Field::FloorTileWidth,
        Field::FloorTileLength,
        Field::WallHeight,
        Field::WallTileWidth,
        Field::WallTileHeight,
        Field::DoorWidth,
        Field::DoorHeight,
    ];

    /// Name used in JSON input and in validation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FloorWidth => "floorWidth",
            Field::FloorLength => "floorLength",
            Field::FloorTileWidth => "floorTileWidth",
            Field::FloorTileLength => "floorTileLength",
            Field::WallHeight => "wallHeight",
            Field::WallTileWidth => "wallTileWidth",
            Field::WallTileHeight => "wallTileHeight",
            Field::DoorWidth => "doorWidth",
            Field::DoorHeight => "doorHeight",
        }
    }

    /// Kebab-case id of the matching form input (and CLI flag).
    pub fn form_id(&self) -> &'static str {
        match self {
            Field::FloorWidth => "floor-width",
            Field::FloorLength => "floor-length",
            Field::FloorTileWidth => "floor-tile-width",
            Field::FloorTileLength => "floor-tile-length",
            Field::WallHeight => "wall-height",
            Field::WallTileWidth => "wall-tile-width",
            Field::WallTileHeight => "wall-tile-height",
            Field::DoorWidth => "door-width",
            Field::DoorHeight => "door-height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts both the camelCase name and the kebab-case form id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s || f.form_id() == s)
            .ok_or_else(|| format!("Unknown field: {s}"))
    }
}

/// Raw room and tile measurements in millimeters, as collected from a form.
///
/// A `None` field is a missing input. Nothing is checked at construction;
/// use [`validate`] before computing anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomTileParams {
    pub floor_width: Option<f64>,
    pub floor_length: Option<f64>,
    pub floor_tile_width: Option<f64>,
    pub floor_tile_length: Option<f64>,
    pub wall_height: Option<f64>,
    pub wall_tile_width: Option<f64>,
    pub wall_tile_height: Option<f64>,
    pub door_width: Option<f64>,
    pub door_height: Option<f64>,
}

impl RoomTileParams {
    /// The example bathroom the tool starts with (2.0 x 1.5 m room, 2.4 m walls).
    pub fn example() -> Self {
        Self {
            floor_width: Some(2000.),
            floor_length: Some(1500.),
            floor_tile_width: Some(300.),
            floor_tile_length: Some(300.),
            wall_height: Some(2400.),
            wall_tile_width: Some(200.),
            wall_tile_height: Some(250.),
            door_width: Some(800.),
            door_height: Some(2000.),
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::FloorWidth => self.floor_width,
            Field::FloorLength => self.floor_length,
            Field::FloorTileWidth => self.floor_tile_width,
            Field::FloorTileLength => self.floor_tile_length,
            Field::WallHeight => self.wall_height,
            Field::WallTileWidth => self.wall_tile_width,
            Field::WallTileHeight => self.wall_tile_height,
            Field::DoorWidth => self.door_width,
            Field::DoorHeight => self.door_height,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::FloorWidth => &mut self.floor_width,
            Field::FloorLength => &mut self.floor_length,
            Field::FloorTileWidth => &mut self.floor_tile_width,
            Field::FloorTileLength => &mut self.floor_tile_length,
            Field::WallHeight => &mut self.wall_height,
            Field::WallTileWidth => &mut self.wall_tile_width,
            Field::WallTileHeight => &mut self.wall_tile_height,
            Field::DoorWidth => &mut self.door_width,
            Field::DoorHeight => &mut self.door_height,
        };
        *slot = value;
    }

    /// Sets a field from user-typed text.
    ///
    /// Blank text clears the field. Text that does not parse is stored as NaN,
    /// which validation then reports as not a positive number.
    pub fn set_from_str(&mut self, field: Field, text: &str) {
        let text = text.trim();
        let value = if text.is_empty() {
            None
        } else {
            Some(text.parse::<f64>().unwrap_or(f64::NAN))
        };
        self.set(field, value);
    }

    /// Returns every violated rule, in a fixed order.
    ///
    /// All rules are evaluated; nothing short-circuits. Dimension comparisons
    /// are skipped when either side is missing or not a number.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for field in Field::ALL {
            if !self.get(field).is_some_and(is_positive_measurement) {
                errors.push(format!("{field} must be a positive number"));
            }
        }

        let exceeds = |a: Option<f64>, b: Option<f64>| matches!((a, b), (Some(a), Some(b)) if a > b);

        if exceeds(self.floor_tile_width, self.floor_width) {
            errors.push("Floor tile width cannot be larger than floor width".to_string());
        }
        if exceeds(self.floor_tile_length, self.floor_length) {
            errors.push("Floor tile length cannot be larger than floor length".to_string());
        }
        if exceeds(self.wall_tile_height, self.wall_height) {
            errors.push("Wall tile height cannot be larger than wall height".to_string());
        }
        if exceeds(self.door_width, self.floor_width) {
            errors.push("Door width cannot be larger than floor width".to_string());
        }
        if exceeds(self.door_height, self.wall_height) {
            errors.push("Door height cannot be larger than wall height".to_string());
        }

        errors
    }

    pub fn report(&self) -> ValidationReport {
        let errors = self.errors();
        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check applied to a single input while it is being typed.
pub fn is_positive_measurement(value: f64) -> bool {
    value.is_finite() && value > 0.
}

/// Outcome of checking a [`RoomTileParams`] without consuming it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// All rules a [`RoomTileParams`] violated, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid room parameters: {}", .errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

/// Room measurements that passed [`validate`].
///
/// Every value is finite and positive, tiles fit their surfaces and the door
/// fits its wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidParams {
    floor_width: f64,
    floor_length: f64,
    floor_tile_width: f64,
    floor_tile_length: f64,
    wall_height: f64,
    wall_tile_width: f64,
    wall_tile_height: f64,
    door_width: f64,
    door_height: f64,
}

impl ValidParams {
    pub fn floor_width(&self) -> f64 {
        self.floor_width
    }
    pub fn floor_length(&self) -> f64 {
        self.floor_length
    }
    pub fn floor_tile_width(&self) -> f64 {
        self.floor_tile_width
    }
    pub fn floor_tile_length(&self) -> f64 {
        self.floor_tile_length
    }
    pub fn wall_height(&self) -> f64 {
        self.wall_height
    }
    pub fn wall_tile_width(&self) -> f64 {
        self.wall_tile_width
    }
    pub fn wall_tile_height(&self) -> f64 {
        self.wall_tile_height
    }
    pub fn door_width(&self) -> f64 {
        self.door_width
    }
    pub fn door_height(&self) -> f64 {
        self.door_height
    }
}

impl From<ValidParams> for RoomTileParams {
    fn from(p: ValidParams) -> Self {
        Self {
            floor_width: Some(p.floor_width),
            floor_length: Some(p.floor_length),
            floor_tile_width: Some(p.floor_tile_width),
            floor_tile_length: Some(p.floor_tile_length),
            wall_height: Some(p.wall_height),
            wall_tile_width: Some(p.wall_tile_width),
            wall_tile_height: Some(p.wall_tile_height),
            door_width: Some(p.door_width),
            door_height: Some(p.door_height),
        }
    }
}

/// Checks all rules and, if none is violated, returns the validated measurements.
pub fn validate(params: &RoomTileParams) -> Result<ValidParams, ValidationError> {
    let errors = params.errors();
    if !errors.is_empty() {
        log::debug!("Rejected room parameters with {} error(s)", errors.len());
        return Err(ValidationError { errors });
    }

    let value = |field: Field| params.get(field).unwrap_or_default();
    Ok(ValidParams {
        floor_width: value(Field::FloorWidth),
        floor_length: value(Field::FloorLength),
        floor_tile_width: value(Field::FloorTileWidth),
        floor_tile_length: value(Field::FloorTileLength),
        wall_height: value(Field::WallHeight),
        wall_tile_width: value(Field::WallTileWidth),
        wall_tile_height: value(Field::WallTileHeight),
        door_width: value(Field::DoorWidth),
        door_height: value(Field::DoorHeight),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_is_valid() {
        let params = RoomTileParams::example();
        let report = params.report();
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(validate(&params).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut params = RoomTileParams::example();
        params.floor_tile_width = Some(0.);
        params.door_height = Some(2500.);
        let err = validate(&params).unwrap_err();
        assert_eq!(
            err.errors,
            vec![
                "floorTileWidth must be a positive number".to_string(),
                "Door height cannot be larger than wall height".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_fields() {
        let params = RoomTileParams::default();
        let errors = params.errors();
        assert_eq!(errors.len(), 9);
        assert_eq!(errors[0], "floorWidth must be a positive number");
        assert_eq!(errors[8], "doorHeight must be a positive number");
    }

    #[test]
    fn test_negative_and_nan() {
        let mut params = RoomTileParams::example();
        params.wall_height = Some(-1.);
        params.set_from_str(Field::DoorWidth, "abc");
        let errors = params.errors();
        assert!(errors.contains(&"wallHeight must be a positive number".to_string()));
        assert!(errors.contains(&"doorWidth must be a positive number".to_string()));
        // -1 < tile height and door height, so both comparisons fire
        assert!(errors.contains(&"Wall tile height cannot be larger than wall height".to_string()));
        assert!(errors.contains(&"Door height cannot be larger than wall height".to_string()));
        // NaN door width is never larger than anything
        assert!(!errors.contains(&"Door width cannot be larger than floor width".to_string()));
    }

    #[test]
    fn test_all_size_rules() {
        let params = RoomTileParams {
            floor_width: Some(500.),
            floor_length: Some(400.),
            floor_tile_width: Some(600.),
            floor_tile_length: Some(600.),
            wall_height: Some(300.),
            wall_tile_width: Some(200.),
            wall_tile_height: Some(400.),
            door_width: Some(800.),
            door_height: Some(2000.),
        };
        let errors = params.errors();
        assert_eq!(
            errors,
            vec![
                "Floor tile width cannot be larger than floor width",
                "Floor tile length cannot be larger than floor length",
                "Wall tile height cannot be larger than wall height",
                "Door width cannot be larger than floor width",
                "Door height cannot be larger than wall height",
            ]
        );
    }

    #[test]
    fn test_equal_sizes_are_allowed() {
        let mut params = RoomTileParams::example();
        params.floor_tile_width = params.floor_width;
        params.door_height = params.wall_height;
        assert!(params.errors().is_empty());
    }

    #[test]
    fn test_field_names() {
        assert_eq!("floor-tile-width".parse::<Field>(), Ok(Field::FloorTileWidth));
        assert_eq!("doorHeight".parse::<Field>(), Ok(Field::DoorHeight));
        assert!("ceilingHeight".parse::<Field>().is_err());
        assert_eq!(Field::WallTileHeight.to_string(), "wallTileHeight");
    }

    #[test]
    fn test_set_from_str() {
        let mut params = RoomTileParams::default();
        params.set_from_str(Field::FloorWidth, " 2000 ");
        assert_eq!(params.floor_width, Some(2000.));
        params.set_from_str(Field::FloorWidth, "");
        assert_eq!(params.floor_width, None);
    }

    #[test]
    fn test_is_positive_measurement() {
        assert!(is_positive_measurement(0.5));
        assert!(!is_positive_measurement(0.));
        assert!(!is_positive_measurement(-3.));
        assert!(!is_positive_measurement(f64::NAN));
        assert!(!is_positive_measurement(f64::INFINITY));
    }

    #[test]
    fn test_infinite_room_is_rejected() {
        let mut params = RoomTileParams::example();
        params.set_from_str(Field::FloorWidth, "inf");
        assert_eq!(params.floor_width, Some(f64::INFINITY));
        assert!(validate(&params).is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let params: RoomTileParams =
            serde_json::from_str(r#"{"floorWidth": 2000, "doorHeight": 1900}"#).unwrap();
        assert_eq!(params.floor_width, Some(2000.));
        assert_eq!(params.door_height, Some(1900.));
        assert_eq!(params.wall_height, None);
    }

    #[test]
    fn test_valid_params_roundtrip_into_raw() {
        let valid = validate(&RoomTileParams::example()).unwrap();
        let raw: RoomTileParams = valid.into();
        assert_eq!(raw, RoomTileParams::example());
    }
}
