use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// Components never reach into `App`; the caller copies what they need out
/// of the current state snapshot each frame.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
