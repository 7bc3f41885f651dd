//! `UiFrame`: a thin wrapper around `ratatui::Frame` that clamps drawing to
//! the visible area.
//!
//! Panels near the desk edge can compute rectangles that drift partially
//! outside the terminal buffer; writing out of bounds panics or corrupts the
//! render. Routing every draw through this wrapper keeps panel code free of
//! manual bounds checks.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Write a string at `(x, y)` clipped to `bounds`. Writes that start
    /// outside the clipped bounds are dropped; text that runs past the right
    /// edge is cut at the edge.
    pub fn set_string(&mut self, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
        let Some(bounds) = self.clip_rect(bounds) else {
            return;
        };
        let right = bounds.x.saturating_add(bounds.width);
        let bottom = bounds.y.saturating_add(bounds.height);
        if x < bounds.x || x >= right || y < bounds.y || y >= bottom {
            return;
        }
        let room = (right - x) as usize;
        let clipped: String = text.chars().take(room).collect();
        self.buffer.set_string(x, y, clipped, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    fn frame_area() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 4,
        }
    }

    fn row_text(buf: &mut Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell_mut((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn set_string_cuts_at_the_bounds_edge_and_drops_outside_writes() {
        let area = frame_area();
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let bounds = Rect {
            x: 2,
            y: 1,
            width: 5,
            height: 2,
        };

        ui.set_string(bounds, 3, 1, "panel title", Style::default());
        // Starts outside the bounds: nothing written, no panic.
        ui.set_string(bounds, 1, 1, "left", Style::default());
        ui.set_string(bounds, 3, 3, "below", Style::default());
        ui.set_string(bounds, 40, 1, "far", Style::default());

        assert_eq!(row_text(&mut buf, 1, area.width), "   pane   ");
        assert_eq!(row_text(&mut buf, 3, area.width), " ".repeat(10));
    }

    #[test]
    fn widgets_clip_to_the_frame_area() {
        let area = frame_area();
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);

        struct Hatch;
        impl Widget for Hatch {
            fn render(self, area: Rect, buf: &mut Buffer) {
                for y in area.y..area.y.saturating_add(area.height) {
                    for x in area.x..area.x.saturating_add(area.width) {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_symbol("#");
                        }
                    }
                }
            }
        }

        // A panel half off the right edge renders only its visible part.
        ui.render_widget(
            Hatch,
            Rect {
                x: 7,
                y: 2,
                width: 6,
                height: 1,
            },
        );
        // Fully offscreen: nothing to render, no panic.
        ui.render_widget(
            Hatch,
            Rect {
                x: 20,
                y: 20,
                width: 3,
                height: 3,
            },
        );

        assert_eq!(row_text(&mut buf, 2, area.width), "       ###");
    }
}
