use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::engine::Phase;

/// Status bar at the bottom of the screen
pub struct StatusBar {
    seat_count: usize,
    phase: Phase,
    fps: u32,
}

impl StatusBar {
    pub fn new(seat_count: usize, phase: Phase) -> Self {
        Self {
            seat_count,
            phase,
            fps: 30,
        }
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    fn phase_text(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "ready",
            Phase::CountingDown => "counting down",
            Phase::Animating => "shuffling",
            Phase::ShowingCompletion => "done",
        }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Background
        let bg_style = Style::default().bg(Color::Rgb(25, 25, 35));
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(bg_style);
        }

        let mut x = area.x + 1;
        let label_style = Style::default().fg(Color::Rgb(100, 100, 120));
        let value_style = Style::default().fg(Color::Rgb(180, 180, 200));
        let accent_style = Style::default()
            .fg(Color::Rgb(100, 200, 150))
            .add_modifier(Modifier::BOLD);

        // Logo
        let logo = "◳ SEKIGAE";
        for ch in logo.chars() {
            if x >= area.x + area.width - 1 {
                return;
            }
            buf[(x, area.y)].set_char(ch).set_style(accent_style);
            x += 1;
        }
        x += 2;

        // Seat count
        let count_text = format!("Seats: {}", self.seat_count);
        for ch in count_text.chars() {
            if x >= area.x + area.width - 1 {
                return;
            }
            buf[(x, area.y)].set_char(ch).set_style(value_style);
            x += 1;
        }
        x += 2;

        // Phase
        let phase_style = if self.phase == Phase::Idle {
            label_style
        } else {
            Style::default()
                .fg(Color::Rgb(255, 200, 100))
                .add_modifier(Modifier::BOLD)
        };
        for ch in self.phase_text().chars() {
            if x >= area.x + area.width - 1 {
                return;
            }
            buf[(x, area.y)].set_char(ch).set_style(phase_style);
            x += 1;
        }
        x += 2;

        // FPS
        let fps_text = format!("{} fps", self.fps);
        for ch in fps_text.chars() {
            if x >= area.x + area.width - 1 {
                return;
            }
            buf[(x, area.y)].set_char(ch).set_style(label_style);
            x += 1;
        }

        // Right-aligned key hints
        let hint = "s:shuffle a:add x:remove ?:help q:quit";
        if area.width > hint.len() as u16 + 2 {
            let mut hx = area.x + area.width - hint.len() as u16 - 1;
            if hx > x + 1 {
                for ch in hint.chars() {
                    buf[(hx, area.y)].set_char(ch).set_style(label_style);
                    hx += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_shows_phase() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(6, Phase::CountingDown).render(area, &mut buf);
        let content: String = buf
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<Vec<_>>()
            .join("");
        assert!(content.contains("counting down"));
        assert!(content.contains("Seats: 6"));
    }

    #[test]
    fn test_status_bar_narrow_area_does_not_panic() {
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(2, Phase::Idle).render(area, &mut buf);
    }
}
