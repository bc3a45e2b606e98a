use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::chart::{Seat, SEAT_HEIGHT, SEAT_WIDTH};
use crate::engine::SeatId;

use super::colors::{dim_color, seat_color};

/// The chart widget: a bordered area with every seat drawn as a small
/// labeled box at its live position. Seats later in registry order draw
/// on top of earlier ones, matching hit-test order.
pub struct ChartWidget<'a> {
    seats: &'a [Seat],
    dragging: Option<&'a SeatId>,
    animating: bool,
}

impl<'a> ChartWidget<'a> {
    pub fn new(seats: &'a [Seat]) -> Self {
        Self {
            seats,
            dragging: None,
            animating: false,
        }
    }

    /// Highlight the seat currently being dragged.
    pub fn dragging(mut self, seat: Option<&'a SeatId>) -> Self {
        self.dragging = seat;
        self
    }

    /// Brighten all seats while a shuffle animation is running.
    pub fn animating(mut self, animating: bool) -> Self {
        self.animating = animating;
        self
    }

    fn draw_seat(&self, seat: &Seat, area: Rect, buf: &mut Buffer) {
        // Seat coordinates are chart-local; clip boxes that stick out.
        let left = seat.position.left.round();
        let top = seat.position.top.round();
        if left < 0.0 || top < 0.0 || left > u16::MAX as f32 / 2.0 || top > u16::MAX as f32 / 2.0 {
            return;
        }
        let x0 = area.x + 1 + left as u16;
        let y0 = area.y + 1 + top as u16;
        if x0 + SEAT_WIDTH >= area.x + area.width || y0 + SEAT_HEIGHT >= area.y + area.height {
            return;
        }

        let is_dragged = self.dragging.is_some_and(|id| id == &seat.id);
        let base = seat_color(seat.color_index);
        let color = if is_dragged || self.animating {
            base
        } else {
            dim_color(base, 0.8)
        };
        let mut box_style = Style::default().fg(color);
        if is_dragged {
            box_style = box_style.add_modifier(Modifier::BOLD);
        }

        // Box border
        for x in x0..x0 + SEAT_WIDTH {
            buf[(x, y0)].set_char('─').set_style(box_style);
            buf[(x, y0 + SEAT_HEIGHT - 1)].set_char('─').set_style(box_style);
        }
        for y in y0..y0 + SEAT_HEIGHT {
            buf[(x0, y)].set_char('│').set_style(box_style);
            buf[(x0 + SEAT_WIDTH - 1, y)].set_char('│').set_style(box_style);
        }
        buf[(x0, y0)].set_char('╭').set_style(box_style);
        buf[(x0 + SEAT_WIDTH - 1, y0)].set_char('╮').set_style(box_style);
        buf[(x0, y0 + SEAT_HEIGHT - 1)].set_char('╰').set_style(box_style);
        buf[(x0 + SEAT_WIDTH - 1, y0 + SEAT_HEIGHT - 1)]
            .set_char('╯')
            .set_style(box_style);

        // Interior row, label centered
        let inner_width = (SEAT_WIDTH - 2) as usize;
        let label = seat.short_label(inner_width);
        let label_len = label.chars().count() as u16;
        let label_x = x0 + 1 + (SEAT_WIDTH - 2 - label_len.min(SEAT_WIDTH - 2)) / 2;
        let label_style = Style::default()
            .fg(Color::Rgb(220, 220, 230))
            .add_modifier(Modifier::BOLD);

        for x in x0 + 1..x0 + SEAT_WIDTH - 1 {
            buf[(x, y0 + 1)].set_char(' ');
        }
        for (i, ch) in label.chars().enumerate() {
            buf[(label_x + i as u16, y0 + 1)]
                .set_char(ch)
                .set_style(label_style);
        }
    }
}

impl Widget for ChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        // Chart border
        let border_style = Style::default().fg(Color::Rgb(40, 40, 50));
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char('─').set_style(border_style);
            buf[(x, area.y + area.height - 1)]
                .set_char('─')
                .set_style(border_style);
        }
        for y in area.y..area.y + area.height {
            buf[(area.x, y)].set_char('│').set_style(border_style);
            buf[(area.x + area.width - 1, y)]
                .set_char('│')
                .set_style(border_style);
        }
        buf[(area.x, area.y)].set_char('┌').set_style(border_style);
        buf[(area.x + area.width - 1, area.y)]
            .set_char('┐')
            .set_style(border_style);
        buf[(area.x, area.y + area.height - 1)]
            .set_char('└')
            .set_style(border_style);
        buf[(area.x + area.width - 1, area.y + area.height - 1)]
            .set_char('┘')
            .set_style(border_style);

        for seat in self.seats {
            self.draw_seat(seat, area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Position;

    fn render_to_buffer(widget: ChartWidget, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_seat_label_appears_in_buffer() {
        let seats = vec![Seat::new(
            "seat-1".to_string(),
            "Aiko".to_string(),
            Position::new(2.0, 1.0),
            0,
        )];
        let buf = render_to_buffer(ChartWidget::new(&seats), 40, 12);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect::<Vec<_>>().join("");
        assert!(content.contains("Aiko"));
    }

    #[test]
    fn test_out_of_bounds_seat_is_clipped() {
        let seats = vec![Seat::new(
            "seat-1".to_string(),
            "Far".to_string(),
            Position::new(500.0, 500.0),
            0,
        )];
        // Must not panic, and the label must not appear.
        let buf = render_to_buffer(ChartWidget::new(&seats), 40, 12);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect::<Vec<_>>().join("");
        assert!(!content.contains("Far"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let seats = Vec::new();
        render_to_buffer(ChartWidget::new(&seats), 2, 1);
    }
}
