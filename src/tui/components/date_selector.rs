//! # Date Selector Component
//!
//! Five rounded boxes (`YYYY MM DD  HH MM`) with the active field reversed.
//! A one-column gap separates the date from the time. Purely presentational:
//! receives a snapshot from `DateSelector::views()`.

use crate::core::selector::{Field, FieldView};
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

pub const BOX_HEIGHT: u16 = 3;

pub struct DateSelectorView {
    pub fields: Vec<FieldView>,
}

impl DateSelectorView {
    pub fn new(fields: Vec<FieldView>) -> Self {
        Self { fields }
    }

    fn constraints(&self) -> Vec<Constraint> {
        let mut constraints = Vec::with_capacity(self.fields.len() + 1);
        for view in &self.fields {
            if view.field == Field::Hour {
                constraints.push(Constraint::Length(1));
            }
            constraints.push(Constraint::Length(view.text.len() as u16 + 2));
        }
        constraints
    }
}

impl Component for DateSelectorView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let areas = Layout::horizontal(self.constraints())
            .flex(Flex::Center)
            .split(area);

        let mut slots = areas.iter();
        for view in &self.fields {
            if view.field == Field::Hour {
                slots.next(); // gap
            }
            let Some(&slot) = slots.next() else {
                break;
            };

            let style = if view.selected {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                Style::default()
            };
            let block = Block::bordered().border_type(BorderType::Rounded);
            let paragraph = Paragraph::new(view.text.as_str())
                .style(style)
                .block(block);
            frame.render_widget(paragraph, slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selector::{DateSelector, MAX_YEAR, MIN_YEAR};
    use crate::core::target::TargetDate;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_all_fields_zero_padded() {
        let selector =
            DateSelector::new(TargetDate::new(2030, 6, 5, 9, 7), MIN_YEAR, MAX_YEAR).unwrap();
        let mut view = DateSelectorView::new(selector.views());

        let mut terminal = Terminal::new(TestBackend::new(40, BOX_HEIGHT)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let middle: String = (0..40u16).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(middle.contains("│2030││06││05│ │09││07│"), "{middle}");
    }

    #[test]
    fn test_selected_field_is_reversed() {
        let mut selector = DateSelector::new(TargetDate::DEFAULT, MIN_YEAR, MAX_YEAR).unwrap();
        selector.select_right();
        let mut view = DateSelectorView::new(selector.views());

        let mut terminal = Terminal::new(TestBackend::new(40, BOX_HEIGHT)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let reversed: String = (0..40u16)
            .filter(|&x| buffer[(x, 1)].modifier.contains(Modifier::REVERSED))
            .map(|x| buffer[(x, 1)].symbol())
            .collect();
        assert!(reversed.contains("01"), "{reversed}");
        assert!(!reversed.contains("2026"));
    }
}
