//! Surface that writes an SVG document.

use crate::draw::color::Color;
use crate::draw::surface::{DrawSurface, TextAlign, TextStyle};
use crate::geom::point::Point;
use crate::geom::rect::Rect;

const FONT_FAMILY: &str = "Arial, sans-serif";

#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    /// Open `<g>` elements per saved state. The last entry is the current state.
    groups: Vec<usize>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            groups: vec![0],
        }
    }

    /// Returns the complete SVG document.
    pub fn to_svg(&self) -> String {
        let open: usize = self.groups.iter().sum();
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        doc.push_str(&self.body);
        for _ in 0..open {
            doc.push_str("</g>\n");
        }
        doc.push_str("</svg>\n");
        doc
    }

    fn open_group(&mut self, transform: String) {
        self.body.push_str(&format!("<g transform=\"{transform}\">\n"));
        if let Some(n) = self.groups.last_mut() {
            *n += 1;
        }
    }
}

fn paint(attr: &str, color: Color) -> String {
    let mut s = format!("{attr}=\"{}\"", color.to_hex());
    if !color.is_opaque() {
        s.push_str(&format!(" {attr}-opacity=\"{}\"", color.a));
    }
    s
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl DrawSurface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.clear();
    }

    fn clear(&mut self) {
        self.body.clear();
        self.groups = vec![0];
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>\n",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            paint("fill", color)
        ));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" {} stroke-width=\"{}\"/>\n",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            paint("stroke", color),
            line_width
        ));
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let anchor = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let weight = if style.font.bold { "bold" } else { "normal" };
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\" font-weight=\"{weight}\" text-anchor=\"{anchor}\" {}>{}</text>\n",
            at.x,
            at.y,
            style.font.size,
            paint("fill", style.color),
            escape(text)
        ));
    }

    fn save(&mut self) {
        self.groups.push(0);
    }

    fn restore(&mut self) {
        // The outermost state can't be popped
        if self.groups.len() > 1 {
            let open = self.groups.pop().unwrap_or_default();
            for _ in 0..open {
                self.body.push_str("</g>\n");
            }
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.open_group(format!("translate({dx} {dy})"));
    }

    fn rotate(&mut self, angle: f64) {
        self.open_group(format!("rotate({})", angle.to_degrees()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::surface::Font;

    #[test]
    fn test_document() {
        let mut s = SvgSurface::new(200., 100.);
        s.fill_rect(Rect::new(1., 2., 3., 4.), Color::rgb(255, 0, 0));
        s.stroke_rect(Rect::new(0., 0., 10., 10.), Color::rgba(0, 0, 0, 0.5), 2.);
        let svg = s.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"200\" height=\"100\""));
        assert!(svg.contains("<rect x=\"1\" y=\"2\" width=\"3\" height=\"4\" fill=\"#ff0000\"/>"));
        assert!(svg.contains("stroke=\"#000000\" stroke-opacity=\"0.5\" stroke-width=\"2\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_transforms_are_balanced() {
        let mut s = SvgSurface::new(10., 10.);
        s.save();
        s.translate(5., 5.);
        s.rotate(-std::f64::consts::FRAC_PI_2);
        let style = TextStyle {
            font: Font::bold(14.),
            align: TextAlign::Center,
            color: Color::rgb(0, 0, 0),
        };
        s.fill_text("A & B", Point::new(0., 0.), &style);
        s.restore();
        let svg = s.to_svg();
        assert!(svg.contains("translate(5 5)"));
        assert!(svg.contains("rotate(-90)"));
        assert!(svg.contains(">A &amp; B</text>"));
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
    }

    #[test]
    fn test_unbalanced_groups_closed() {
        let mut s = SvgSurface::new(10., 10.);
        s.translate(1., 1.);
        s.restore();
        let svg = s.to_svg();
        assert_eq!(svg.matches("<g ").count(), 1);
        assert_eq!(svg.matches("</g>").count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut s = SvgSurface::new(10., 10.);
        s.fill_rect(Rect::new(0., 0., 1., 1.), Color::rgb(0, 0, 0));
        s.clear();
        assert!(!s.to_svg().contains("<rect"));
    }
}
