//! # HelpBar Component
//!
//! Bottom line listing the key bindings.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

pub const HELP_TEXT: &str = "←/h/a →/l/d select  ↑/k/w increase  ↓/j/s decrease  q/Esc quit";

pub struct HelpBar;

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)).centered();
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_help_bar_lists_every_key_family() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| HelpBar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        for hint in ["←/h/a", "→/l/d", "↑/k/w", "↓/j/s", "q/Esc quit"] {
            assert!(text.contains(hint), "missing {hint} in {text}");
        }
    }
}
