//! Wheel drawing
//!
//! Every cell inside the disc is painted with the segment that covers it,
//! using the same angle convention as the resolver: screen angles are
//! measured clockwise from the pointer, and the wheel frame lags the screen
//! by the current rotation.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::components::{Marquee, BULB_COUNT};
use crate::theme::{symbols, Theme};
use crate::wheel::{segment_index_at, Segments};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// Width of the rim band that carries the bulbs
const RIM_WIDTH: f64 = 2.0;

/// Smallest disc radius worth drawing
const MIN_RADIUS: f64 = 4.0;

/// Where the wheel sits inside its area, in horizontal cell units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl WheelGeometry {
    /// Largest wheel that fits in `area` with a row left for the pointer
    pub fn fit(area: Rect) -> Option<Self> {
        let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
        let cy = f64::from(area.y) + f64::from(area.height) / 2.0;
        let outer = (f64::from(area.width) / 2.0 - 1.0).min(f64::from(area.height) - 2.0);
        let radius = (outer - RIM_WIDTH).floor();

        (radius >= MIN_RADIUS).then_some(Self { cx, cy, radius })
    }

    /// Offset of a cell centre from the wheel centre, corrected for cell shape
    fn offset(&self, x: u16, y: u16) -> (f64, f64) {
        (
            f64::from(x) + 0.5 - self.cx,
            (f64::from(y) + 0.5 - self.cy) * CELL_ASPECT,
        )
    }

    /// Cell at `distance` from the centre along screen angle `degrees`
    fn cell_at(&self, degrees: f64, distance: f64) -> (f64, f64) {
        let radians = degrees.to_radians();
        (
            self.cx + distance * radians.sin(),
            self.cy - distance * radians.cos() / CELL_ASPECT,
        )
    }

    fn hub_radius(&self) -> f64 {
        (self.radius * 0.22).max(3.0)
    }
}

/// Screen angle of an offset, clockwise from straight up
fn screen_angle(dx: f64, dy: f64) -> f64 {
    dx.atan2(-dy).to_degrees()
}

/// The spinning wheel with its rim, bulbs, hub and pointer
pub struct WheelWidget<'a> {
    pub segments: &'a Segments,
    /// Rotation to draw, in degrees
    pub rotation: f64,
    pub marquee: &'a Marquee,
    /// Text on the hub button
    pub hub_label: &'a str,
    pub theme: &'a Theme,
}

impl Widget for WheelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(geometry) = WheelGeometry::fit(area) else {
            if area.width > 0 && area.height > 0 {
                buf.set_stringn(
                    area.x,
                    area.y,
                    "Enlarge the terminal to see the wheel",
                    usize::from(area.width),
                    self.theme.text_muted(),
                );
            }
            return;
        };

        let count = self.segments.count();
        let hub_radius = geometry.hub_radius();

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (dx, dy) = geometry.offset(x, y);
                let distance = dx.hypot(dy);

                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };

                if distance <= hub_radius {
                    cell.set_symbol(" ").set_style(self.theme.hub());
                } else if distance <= geometry.radius {
                    let wheel_angle = screen_angle(dx, dy) - self.rotation;
                    let index = segment_index_at(wheel_angle, count);
                    if let Some(segment) = self.segments.get(index) {
                        cell.set_symbol(" ").set_style(self.theme.wedge(segment.color));
                    }
                } else if distance <= geometry.radius + RIM_WIDTH {
                    cell.set_symbol(symbols::RIM).set_style(self.theme.rim());
                }
            }
        }

        self.render_bulbs(geometry, area, buf);
        self.render_labels(geometry, area, buf);
        self.render_hub_label(geometry, area, buf);
        self.render_pointer(geometry, area, buf);
    }
}

impl WheelWidget<'_> {
    fn render_bulbs(&self, geometry: WheelGeometry, area: Rect, buf: &mut Buffer) {
        for bulb in 0..BULB_COUNT {
            let (x, y) = geometry.cell_at(Marquee::bulb_angle(bulb), geometry.radius + 1.0);
            if let Some(cell) = cell_in(area, buf, x, y) {
                cell.set_symbol(symbols::BULB)
                    .set_style(self.theme.bulb(self.marquee.is_lit(bulb)));
            }
        }
    }

    fn render_labels(&self, geometry: WheelGeometry, area: Rect, buf: &mut Buffer) {
        let width = self.segments.segment_width();
        let max_chars = ((geometry.radius * 0.55) as usize).max(3);

        for (index, segment) in self.segments.iter().enumerate() {
            let middle = (index as f64 + 0.5) * width + self.rotation;
            let (x, y) = geometry.cell_at(middle, geometry.radius * 0.62);

            let label: String = segment.label.chars().take(max_chars).collect();
            let half = label.chars().count() as f64 / 2.0;
            put_str(
                area,
                buf,
                x - half,
                y,
                &label,
                self.theme.wedge_label(segment.color),
            );
        }
    }

    fn render_hub_label(&self, geometry: WheelGeometry, area: Rect, buf: &mut Buffer) {
        let half = self.hub_label.chars().count() as f64 / 2.0;
        put_str(
            area,
            buf,
            geometry.cx - half,
            geometry.cy,
            self.hub_label,
            self.theme.hub().add_modifier(ratatui::style::Modifier::BOLD),
        );
    }

    fn render_pointer(&self, geometry: WheelGeometry, area: Rect, buf: &mut Buffer) {
        let rim_top = geometry.cy - (geometry.radius + RIM_WIDTH) / CELL_ASPECT;
        let y = (rim_top.floor() - 1.0).max(f64::from(area.top()));
        if let Some(cell) = cell_in(area, buf, geometry.cx, y) {
            cell.set_symbol(symbols::POINTER).set_style(self.theme.title());
        }
    }
}

fn cell_in(area: Rect, buf: &mut Buffer, x: f64, y: f64) -> Option<&mut ratatui::buffer::Cell> {
    let (x, y) = (x.floor(), y.floor());
    if x < f64::from(area.left())
        || y < f64::from(area.top())
        || x >= f64::from(area.right())
        || y >= f64::from(area.bottom())
    {
        return None;
    }
    buf.cell_mut((x as u16, y as u16))
}

fn put_str(area: Rect, buf: &mut Buffer, x: f64, y: f64, text: &str, style: ratatui::style::Style) {
    let (x, y) = (x.round().max(f64::from(area.left())), y.floor());
    if y < f64::from(area.top()) || y >= f64::from(area.bottom()) || x >= f64::from(area.right()) {
        return;
    }
    let (x, y) = (x as u16, y as u16);
    buf.set_stringn(x, y, text, usize::from(area.right() - x), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::segment_color;
    use crate::wheel::{resolve, Variant};

    fn render(variant: Variant, rotation: f64) -> (Buffer, WheelGeometry, Segments) {
        let config = variant.config().unwrap();
        let segments = config.segments().clone();
        let theme = Theme::new();
        let marquee = Marquee::new();
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);

        WheelWidget {
            segments: &segments,
            rotation,
            marquee: &marquee,
            hub_label: "SPIN",
            theme: &theme,
        }
        .render(area, &mut buf);

        (buf, WheelGeometry::fit(area).unwrap(), segments)
    }

    /// The wedge cell just below the pointer
    fn cell_under_pointer(buf: &Buffer, geometry: WheelGeometry) -> ratatui::style::Color {
        let x = geometry.cx.floor() as u16;
        let y = (geometry.cy - geometry.radius / CELL_ASPECT + 2.0).floor() as u16;
        buf[(x, y)].bg
    }

    #[test]
    fn fits_inside_the_area() {
        let geometry = WheelGeometry::fit(Rect::new(0, 0, 60, 30)).unwrap();
        assert_eq!(geometry.radius, 26.0);
        assert!(WheelGeometry::fit(Rect::new(0, 0, 10, 5)).is_none());
    }

    #[test]
    fn pointer_sits_above_the_rim() {
        let (buf, _, _) = render(Variant::Classic, 0.0);
        assert_eq!(buf[(30, 0)].symbol(), symbols::POINTER);
    }

    #[test]
    fn drawn_wedge_under_pointer_matches_resolver() {
        for (variant, rotation) in [
            (Variant::Classic, 0.0),
            (Variant::Classic, 90.0),
            (Variant::Classic, 3000.0),
            (Variant::Deluxe, 270.0),
            (Variant::Deluxe, 1234.0),
        ] {
            let (buf, geometry, segments) = render(variant, rotation);
            let expected = segment_color(resolve(rotation, &segments).color);
            assert_eq!(
                cell_under_pointer(&buf, geometry),
                expected,
                "{variant:?} at {rotation}"
            );
        }
    }

    #[test]
    fn hub_shows_its_label() {
        let (buf, geometry, _) = render(Variant::Deluxe, 0.0);
        let y = geometry.cy.floor() as u16;
        let row: String = (0..60).map(|x| buf[(x, y)].symbol().to_string()).collect();
        assert!(row.contains("SPIN"), "hub row was {row:?}");
    }

    #[test]
    fn tiny_area_shows_a_hint_instead() {
        let segments = Variant::Classic.config().unwrap().segments().clone();
        let theme = Theme::new();
        let marquee = Marquee::new();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        WheelWidget {
            segments: &segments,
            rotation: 0.0,
            marquee: &marquee,
            hub_label: "SPIN",
            theme: &theme,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "E");
    }
}
