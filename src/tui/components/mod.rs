//! # TUI Components
//!
//! All components here are stateless: they receive a snapshot of core state
//! as props each frame and render it.
//!
//! - `TitleBar`: app name, current target, expired flag
//! - `CountdownDisplay`: big-digit `HH:MM:SS`
//! - `DateSelectorView`: the five editable field boxes
//! - `HelpBar`: key bindings
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by directly accessing
//! `App`. This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(app.status_message.clone(), app.expired).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! title_bar.render(frame, area); // reads from global App
//! ```

pub mod countdown_display;
pub mod date_selector;
pub mod help_bar;
mod title_bar;

pub use countdown_display::CountdownDisplay;
pub use date_selector::DateSelectorView;
pub use help_bar::HelpBar;
pub use title_bar::TitleBar;
