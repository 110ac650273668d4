use crate::draw::color::{Color, ColorJitter, RandomJitter};
use crate::draw::config::RenderConfig;
use crate::draw::layout::{WallPanel, floor_layout, wall_layout};
use crate::draw::surface::{DrawSurface, Font, TextAlign, TextStyle};
use crate::estimate::CalculationBundle;
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

/// Which drawing to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Floor,
    Walls,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Floor => "floor",
            View::Walls => "walls",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floor" => Ok(View::Floor),
            "walls" => Ok(View::Walls),
            _ => Err(format!("Unknown view: {s} (expected floor or walls)")),
        }
    }
}

/// Draws estimates onto a surface it owns.
///
/// The last bundle and view are kept so the drawing can be repeated after
/// the surface changes size.
pub struct Renderer<S: DrawSurface> {
    surface: S,
    config: RenderConfig,
    jitter: Box<dyn ColorJitter>,
    current_view: View,
    last_bundle: Option<CalculationBundle>,
}

impl<S: DrawSurface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            config: RenderConfig::new(),
            jitter: Box::new(RandomJitter::new()),
            current_view: View::Floor,
            last_bundle: None,
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_jitter(mut self, jitter: impl ColorJitter + 'static) -> Self {
        self.jitter = Box::new(jitter);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn last_bundle(&self) -> Option<&CalculationBundle> {
        self.last_bundle.as_ref()
    }

    /// Clears the surface and draws `view` of `bundle`.
    pub fn draw(&mut self, bundle: &CalculationBundle, view: View) {
        self.last_bundle = Some(*bundle);
        self.current_view = view;
        self.surface.clear();
        let background = Rect::new(0., 0., self.surface.width(), self.surface.height());
        self.surface.fill_rect(background, self.config.background_color);

        log::debug!(
            "Drawing {view} view on {}x{} surface",
            self.surface.width(),
            self.surface.height()
        );
        match view {
            View::Floor => self.draw_floor_plan(bundle),
            View::Walls => self.draw_wall_elevations(bundle),
        }
    }

    /// Draws the last bundle again. Returns false if nothing was drawn yet.
    pub fn redraw(&mut self) -> bool {
        match self.last_bundle {
            Some(bundle) => {
                self.draw(&bundle, self.current_view);
                true
            }
            None => false,
        }
    }

    /// Resizes the surface and redraws the last bundle, if any.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.redraw();
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    fn text_style(&self, font: Font, align: TextAlign) -> TextStyle {
        TextStyle {
            font,
            align,
            color: self.config.text_color,
        }
    }

    fn draw_title(&mut self, title: &str) {
        let style = self.text_style(self.config.title_font, TextAlign::Center);
        let at = Point::new(self.surface.width() / 2., self.config.title_y);
        self.surface.fill_text(title, at, &style);
    }

    fn draw_tiles(&mut self, tiles: &[Rect], base: Color, jitter: (f64, f64), grout_width: f64) {
        let grout = self.config.grout_color;
        for tile in tiles {
            let color = base.adjust(self.jitter.offset(jitter.0..jitter.1));
            self.surface.fill_rect(*tile, color);
            self.surface.stroke_rect(*tile, grout, grout_width);
        }
    }

    fn draw_floor_plan(&mut self, bundle: &CalculationBundle) {
        let params = &bundle.params;
        let layout = floor_layout(
            params,
            self.surface.width(),
            self.surface.height(),
            &self.config,
        );

        self.draw_title("Floor Plan View");
        self.draw_tiles(
            &layout.tiles,
            self.config.floor_tile_color,
            self.config.floor_jitter,
            self.config.floor_grout_width,
        );

        let room = layout.room;
        self.surface.stroke_rect(
            room,
            self.config.border_color,
            self.config.floor_border_width,
        );

        // Width on top, length rotated along the right side
        let style = self.text_style(self.config.dimension_font, TextAlign::Center);
        self.surface.fill_text(
            &format!("{} mm", params.floor_width()),
            Point::new(room.x + room.width / 2., room.y - 20.),
            &style,
        );
        self.surface.save();
        self.surface
            .translate(room.x + room.width + 30., room.y + room.height / 2.);
        self.surface.rotate(-FRAC_PI_2);
        self.surface.fill_text(
            &format!("{} mm", params.floor_length()),
            Point::new(0., 0.),
            &style,
        );
        self.surface.restore();

        let style = self.text_style(self.config.legend_font, TextAlign::Left);
        self.surface.fill_text(
            &format!(
                "Floor Tile: {} × {} mm",
                params.floor_tile_width(),
                params.floor_tile_length()
            ),
            Point::new(room.x, room.y + room.height + 30.),
            &style,
        );
    }

    fn draw_wall_elevations(&mut self, bundle: &CalculationBundle) {
        let layout = wall_layout(
            &bundle.params,
            self.surface.width(),
            self.surface.height(),
            &self.config,
        );

        self.draw_title("Wall Elevations (4 Walls)");
        for panel in &layout.panels {
            self.draw_wall(panel);
        }
    }

    fn draw_wall(&mut self, panel: &WallPanel) {
        self.draw_tiles(
            &panel.tiles,
            self.config.wall_tile_color,
            self.config.wall_jitter,
            self.config.wall_grout_width,
        );

        if let Some(door) = panel.door {
            self.surface.fill_rect(door, self.config.door_color);
            self.surface.stroke_rect(
                door,
                self.config.border_color,
                self.config.door_border_width,
            );
            let style = self.text_style(self.config.door_label_font, TextAlign::Center);
            self.surface
                .fill_text("DOOR", door.center() + (0., 4.), &style);
        }

        let rect = panel.rect;
        self.surface.stroke_rect(
            rect,
            self.config.border_color,
            self.config.wall_border_width,
        );

        let center_x = rect.x + rect.width / 2.;
        let style = self.text_style(self.config.panel_label_font, TextAlign::Center);
        self.surface
            .fill_text(panel.side.label(), Point::new(center_x, rect.y - 10.), &style);

        let style = self.text_style(self.config.panel_caption_font, TextAlign::Center);
        self.surface.fill_text(
            &format!("{}mm × {}mm", panel.real_width, panel.real_height),
            Point::new(center_x, rect.y + rect.height + 20.),
            &style,
        );
    }
}
