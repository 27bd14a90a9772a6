use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::countdown_display::DIGIT_ROWS;
use crate::tui::components::date_selector::BOX_HEIGHT;
use crate::tui::components::{CountdownDisplay, DateSelectorView, HelpBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone(), app.expired).render(frame, title_area);

    // Countdown above the selector, the pair centered vertically
    let [countdown_area, _spacer, selector_area] =
        Layout::vertical([Length(DIGIT_ROWS), Length(1), Length(BOX_HEIGHT)])
            .flex(Flex::Center)
            .areas(main_area);

    CountdownDisplay::new(app.countdown.display().to_string(), app.expired)
        .render(frame, countdown_area);
    DateSelectorView::new(app.selector.views()).render(frame, selector_area);

    HelpBar.render(frame, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::target::TargetDate;
    use crate::test_support::{fixed_now, test_app_with};
    use chrono::TimeDelta;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_shows_all_parts() {
        let mut app = test_app_with(TargetDate::new(2030, 6, 15, 9, 5));
        update(&mut app, Action::Tick(fixed_now()));

        let text = screen_text(&app, 80, 24);
        assert!(text.contains("Countdown | Target: 2030-06-15 09:05"));
        assert!(text.contains("│2030││06││15│ │09││05│"));
        assert!(text.contains("q/Esc quit"));
        assert!(text.contains("╭─╮"));
    }

    #[test]
    fn test_draw_ui_expired() {
        let mut app = test_app_with(TargetDate::new(2020, 1, 1, 0, 0));
        update(&mut app, Action::Tick(fixed_now() + TimeDelta::days(1)));

        let text = screen_text(&app, 80, 24);
        assert!(text.contains("Expired"));
    }

    #[test]
    fn test_draw_ui_tiny_terminal_does_not_panic() {
        let app = test_app_with(TargetDate::DEFAULT);
        screen_text(&app, 10, 3);
    }
}
