use crate::draw::color::Color;
use crate::draw::surface::Font;
use serde::{Deserialize, Serialize};

/// Colors, spacing and fonts used when drawing floor plans and wall elevations.
///
/// Distances are in surface pixels. Jitter ranges are brightness offsets added
/// to every channel of a tile color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    // Palette
    pub floor_tile_color: Color,
    pub wall_tile_color: Color,
    pub grout_color: Color,
    pub door_color: Color,
    pub background_color: Color,
    pub text_color: Color,
    pub border_color: Color,

    // Shared
    pub title_y: f64,
    pub title_font: Font,

    // Floor plan
    pub floor_padding: f64,
    pub floor_grout_width: f64,
    pub floor_border_width: f64,
    pub floor_jitter: (f64, f64),
    pub dimension_font: Font,
    pub legend_font: Font,

    // Wall elevations
    pub wall_padding: f64,
    pub wall_gap: f64,
    /// Height held back from the panel grid for the title.
    pub wall_title_reserve: f64,
    /// Vertical shift of the panel grid below the top padding.
    pub wall_title_offset: f64,
    /// Wall panels are never drawn larger than this fraction of true size.
    pub wall_scale_cap: f64,
    pub wall_grout_width: f64,
    pub wall_border_width: f64,
    pub wall_jitter: (f64, f64),
    pub door_border_width: f64,
    pub panel_label_font: Font,
    pub panel_caption_font: Font,
    pub door_label_font: Font,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            floor_tile_color: Color::rgb(0x8b, 0x45, 0x13),
            wall_tile_color: Color::rgb(0x4a, 0x90, 0xe2),
            grout_color: Color::rgb(0xcc, 0xcc, 0xcc),
            door_color: Color::rgba(139, 69, 19, 0.3),
            background_color: Color::rgb(0xf5, 0xf5, 0xf5),
            text_color: Color::rgb(0x2c, 0x3e, 0x50),
            border_color: Color::rgb(0x33, 0x33, 0x33),

            title_y: 30.,
            title_font: Font::bold(20.),

            floor_padding: 80.,
            floor_grout_width: 1.,
            floor_border_width: 3.,
            floor_jitter: (-10., 10.),
            dimension_font: Font::regular(14.),
            legend_font: Font::regular(12.),

            wall_padding: 60.,
            wall_gap: 40.,
            wall_title_reserve: 40.,
            wall_title_offset: 50.,
            wall_scale_cap: 0.3,
            wall_grout_width: 0.5,
            wall_border_width: 2.,
            wall_jitter: (-7., 8.),
            door_border_width: 2.,
            panel_label_font: Font::bold(14.),
            panel_caption_font: Font::regular(11.),
            door_label_font: Font::regular(12.),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::new();
        assert_eq!(config.floor_tile_color, Color::rgb(139, 69, 19));
        assert_eq!(config.wall_tile_color, Color::rgb(74, 144, 226));
        assert_eq!(config.door_color.to_string(), "rgba(139, 69, 19, 0.3)");
        assert_eq!(config.floor_padding, 80.);
        assert_eq!(config.wall_scale_cap, 0.3);
    }

    #[test]
    fn test_default_trait() {
        assert_eq!(RenderConfig::default(), RenderConfig::new());
    }

    #[test]
    fn test_partial_json() {
        let config: RenderConfig =
            serde_json::from_str(r##"{"wallScaleCap": 1.0, "wall_scale_cap": 0.5, "gridColor": "#000000"}"##)
                .unwrap();
        // Unknown keys are ignored, known ones override the defaults
        assert_eq!(config.wall_scale_cap, 0.5);
        assert_eq!(config.floor_padding, 80.);
    }

    #[test]
    fn test_custom_values() {
        let mut config = RenderConfig::new();
        config.floor_tile_color = Color::rgb(1, 2, 3);
        config.wall_gap = 10.;
        assert_eq!(config.floor_tile_color, Color::rgb(1, 2, 3));
        assert_eq!(config.wall_gap, 10.);
    }
}
