//! # Countdown Display Component
//!
//! Renders the `HH:MM:SS` string in three-row box-drawing digits, centered.
//! Falls back to a single plain line when the area is too narrow or short.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub const DIGIT_ROWS: u16 = 3;

pub struct CountdownDisplay {
    pub text: String,
    pub expired: bool,
}

impl CountdownDisplay {
    pub fn new(text: String, expired: bool) -> Self {
        Self { text, expired }
    }
}

impl Component for CountdownDisplay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.expired {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };

        let rows = big_text(&self.text);
        let fits = area.height >= DIGIT_ROWS
            && rows[0].chars().count() <= usize::from(area.width);

        let lines: Vec<Line> = if fits {
            rows.into_iter().map(Line::from).collect()
        } else {
            vec![Line::from(self.text.clone())]
        };

        let paragraph = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

/// Lays `text` out as three rows of glyphs.
pub fn big_text(text: &str) -> [String; 3] {
    let mut rows: [String; 3] = Default::default();
    for c in text.chars() {
        let glyph = glyph(c);
        for (row, part) in rows.iter_mut().zip(glyph) {
            row.push_str(part);
        }
    }
    rows
}

fn glyph(c: char) -> [&'static str; 3] {
    match c {
        '0' => ["╭─╮", "│ │", "╰─╯"],
        '1' => ["╶┐ ", " │ ", "╶┴╴"],
        '2' => ["╶─╮", "┌─┘", "╰─╴"],
        '3' => ["╶─╮", " ─┤", "╶─╯"],
        '4' => ["╷ ╷", "╰─┤", "  ╵"],
        '5' => ["╭─╴", "╰─╮", "╶─╯"],
        '6' => ["╭─╴", "├─╮", "╰─╯"],
        '7' => ["╶─┐", "  │", "  ╵"],
        '8' => ["╭─╮", "├─┤", "╰─╯"],
        '9' => ["╭─╮", "╰─┤", "╶─╯"],
        ':' => [" ", ":", " "],
        _ => ["   ", "   ", "   "],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_big_text_row_widths_line_up() {
        let rows = big_text("01:01:01");
        let widths: Vec<usize> = rows.iter().map(|r| r.chars().count()).collect();
        assert_eq!(widths, [20, 20, 20]);
    }

    #[test]
    fn test_big_text_digits() {
        let rows = big_text("8");
        assert_eq!(rows, ["╭─╮", "├─┤", "╰─╯"].map(String::from));
    }

    #[test]
    fn test_renders_big_digits_when_room() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut display = CountdownDisplay::new("10:00:00".to_string(), false);
        terminal.draw(|f| display.render(f, f.area())).unwrap();

        let rows = buffer_rows(&terminal);
        assert!(rows[0].contains("╶┐ ╭─╮"));
        assert!(rows[2].contains("╶┴╴╰─╯"));
    }

    #[test]
    fn test_falls_back_to_plain_text_when_narrow() {
        let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();
        let mut display = CountdownDisplay::new("123:04:05".to_string(), false);
        terminal.draw(|f| display.render(f, f.area())).unwrap();

        let rows = buffer_rows(&terminal);
        assert!(rows[0].contains("123:04:05"));
    }
}
