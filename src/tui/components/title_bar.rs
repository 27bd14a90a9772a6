//! # TitleBar Component
//!
//! Top status bar showing the application name, the current target and
//! whether the countdown has run out.
//!
//! ## Conditional Formatting
//!
//! 1. **Expired**: `"Countdown | Target: 2026-01-01 00:00 | Expired"`
//! 2. **Status message**: `"Countdown | Target: 2026-01-01 00:00"`
//! 3. **Default**: `"Countdown"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar {
    /// Status message (e.g. "Target: 2026-01-01 00:00")
    pub status_message: String,
    /// Whether the target instant has passed
    pub expired: bool,
}

impl TitleBar {
    pub fn new(status_message: String, expired: bool) -> Self {
        Self {
            status_message,
            expired,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Countdown",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        if self.expired {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Expired", Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
