use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// 3x5 digit font for the countdown overlay. Each '#' cell is drawn as
/// two block characters to keep the aspect ratio roughly square.
const DIGIT_ROWS: usize = 5;
const DIGIT_COLS: usize = 3;
const BIG_DIGITS: [[&str; DIGIT_ROWS]; 10] = [
    ["###", "# #", "# #", "# #", "###"], // 0
    ["  #", "  #", "  #", "  #", "  #"], // 1
    ["###", "  #", "###", "#  ", "###"], // 2
    ["###", "  #", "###", "  #", "###"], // 3
    ["# #", "# #", "###", "  #", "  #"], // 4
    ["###", "#  ", "###", "  #", "###"], // 5
    ["###", "#  ", "###", "# #", "###"], // 6
    ["###", "  #", "  #", "  #", "  #"], // 7
    ["###", "# #", "###", "# #", "###"], // 8
    ["###", "# #", "###", "  #", "###"], // 9
];

fn decimal_digits(value: u32) -> Vec<usize> {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    let mut rest = value;
    while rest > 0 {
        digits.push((rest % 10) as usize);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Full-screen countdown overlay: the remaining seconds as large block
/// digits in the middle of the chart.
pub struct CountdownOverlay {
    value: u32,
}

impl CountdownOverlay {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl Widget for CountdownOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let digits = decimal_digits(self.value);
        // Each digit cell is doubled horizontally, one space between digits.
        let digit_width = (DIGIT_COLS * 2) as u16;
        let total_width = digit_width * digits.len() as u16 + (digits.len() as u16 - 1);
        if area.width < total_width + 2 || area.height < DIGIT_ROWS as u16 + 2 {
            return;
        }

        let x0 = area.x + (area.width - total_width) / 2;
        let y0 = area.y + (area.height - DIGIT_ROWS as u16) / 2;
        let style = Style::default()
            .fg(Color::Rgb(255, 200, 100))
            .add_modifier(Modifier::BOLD);

        let mut x = x0;
        for digit in digits {
            for (row, pattern) in BIG_DIGITS[digit].iter().enumerate() {
                for (col, ch) in pattern.chars().enumerate() {
                    if ch == '#' {
                        let cx = x + (col * 2) as u16;
                        let cy = y0 + row as u16;
                        buf[(cx, cy)].set_char('█').set_style(style);
                        buf[(cx + 1, cy)].set_char('█').set_style(style);
                    }
                }
            }
            x += digit_width + 1;
        }
    }
}

/// Completion banner shown after the seats have settled.
pub struct CompletionBanner;

impl Widget for CompletionBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = " Shuffle complete!! ";
        let box_width = message.len() as u16 + 2;
        let box_height = 3;
        if area.width < box_width || area.height < box_height {
            return;
        }

        let x0 = area.x + (area.width - box_width) / 2;
        let y0 = area.y + (area.height - box_height) / 2;

        let border_style = Style::default().fg(Color::Rgb(100, 200, 150));
        let text_style = Style::default()
            .fg(Color::Rgb(100, 200, 150))
            .add_modifier(Modifier::BOLD);

        for x in x0..x0 + box_width {
            buf[(x, y0)].set_char('─').set_style(border_style);
            buf[(x, y0 + 2)].set_char('─').set_style(border_style);
        }
        buf[(x0, y0)].set_char('╭').set_style(border_style);
        buf[(x0 + box_width - 1, y0)].set_char('╮').set_style(border_style);
        buf[(x0, y0 + 1)].set_char('│').set_style(border_style);
        buf[(x0 + box_width - 1, y0 + 1)]
            .set_char('│')
            .set_style(border_style);
        buf[(x0, y0 + 2)].set_char('╰').set_style(border_style);
        buf[(x0 + box_width - 1, y0 + 2)]
            .set_char('╯')
            .set_style(border_style);

        for (i, ch) in message.chars().enumerate() {
            buf[(x0 + 1 + i as u16, y0 + 1)]
                .set_char(ch)
                .set_style(text_style);
        }
    }
}

/// Help overlay listing the controls.
pub struct HelpOverlay;

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let box_width: u16 = 44;
        let box_height: u16 = 12;
        if area.width < box_width || area.height < box_height {
            return;
        }

        let box_x = area.x + (area.width - box_width) / 2;
        let box_y = area.y + (area.height - box_height) / 2;
        let border_style = Style::default().fg(Color::Rgb(80, 80, 100));

        // Clear the box interior
        for y in box_y..box_y + box_height {
            for x in box_x..box_x + box_width {
                buf[(x, y)].set_char(' ').set_style(Style::default());
            }
        }

        // Border
        for x in box_x..box_x + box_width {
            buf[(x, box_y)].set_char('─').set_style(border_style);
            buf[(x, box_y + box_height - 1)]
                .set_char('─')
                .set_style(border_style);
        }
        for y in box_y..box_y + box_height {
            buf[(box_x, y)].set_char('│').set_style(border_style);
            buf[(box_x + box_width - 1, y)]
                .set_char('│')
                .set_style(border_style);
        }
        buf[(box_x, box_y)].set_char('╭').set_style(border_style);
        buf[(box_x + box_width - 1, box_y)]
            .set_char('╮')
            .set_style(border_style);
        buf[(box_x, box_y + box_height - 1)]
            .set_char('╰')
            .set_style(border_style);
        buf[(box_x + box_width - 1, box_y + box_height - 1)]
            .set_char('╯')
            .set_style(border_style);

        // Title
        let title = " Seating Chart Controls ";
        let title_x = box_x + (box_width - title.len() as u16) / 2;
        let title_style = Style::default()
            .fg(Color::Rgb(100, 200, 150))
            .add_modifier(Modifier::BOLD);
        for (i, ch) in title.chars().enumerate() {
            buf[(title_x + i as u16, box_y)]
                .set_char(ch)
                .set_style(title_style);
        }

        let key_style = Style::default()
            .fg(Color::Rgb(200, 200, 100))
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::Rgb(180, 180, 190));

        let controls = [
            ("s, Enter", "Shuffle the seats"),
            ("a, +", "Add a seat"),
            ("x, -", "Remove the last seat"),
            ("drag", "Move a seat with the mouse"),
            ("?", "Toggle this help"),
            ("q, Esc", "Quit"),
        ];

        let mut y = box_y + 2;
        for (key, desc) in controls {
            let mut x = box_x + 3;
            for ch in key.chars() {
                buf[(x, y)].set_char(ch).set_style(key_style);
                x += 1;
            }
            x = box_x + 14;
            for ch in desc.chars() {
                if x >= box_x + box_width - 2 {
                    break;
                }
                buf[(x, y)].set_char(ch).set_style(desc_style);
                x += 1;
            }
            y += 1;
        }

        // Footer
        let footer = "Press any key to close";
        let footer_x = box_x + (box_width - footer.len() as u16) / 2;
        let footer_style = Style::default().fg(Color::Rgb(100, 100, 120));
        for (i, ch) in footer.chars().enumerate() {
            buf[(footer_x + i as u16, box_y + box_height - 2)]
                .set_char(ch)
                .set_style(footer_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_patterns_are_well_formed() {
        for digit in BIG_DIGITS {
            for row in digit {
                assert_eq!(row.len(), DIGIT_COLS);
            }
        }
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), vec![0]);
        assert_eq!(decimal_digits(3), vec![3]);
        assert_eq!(decimal_digits(12), vec![1, 2]);
    }

    #[test]
    fn test_countdown_renders_blocks() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        CountdownOverlay::new(3).render(area, &mut buf);
        let blocks = buf.content().iter().filter(|c| c.symbol() == "█").count();
        assert!(blocks > 0);
    }

    #[test]
    fn test_overlays_skip_tiny_areas() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        CountdownOverlay::new(3).render(area, &mut buf);
        CompletionBanner.render(area, &mut buf);
        HelpOverlay.render(area, &mut buf);
        let blocks = buf.content().iter().filter(|c| c.symbol() != " ").count();
        assert_eq!(blocks, 0);
    }
}
