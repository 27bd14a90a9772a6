//! # Core Application Logic
//!
//! The countdown's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calendar`]: leap years, month lengths, ring arithmetic
//! - [`field`] / [`selector`]: the five-field date editor
//! - [`countdown`] / [`ticker`]: remaining-time display and its cadence
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`date_store`] / [`config`]: the date file and settings

pub mod action;
pub mod calendar;
pub mod config;
pub mod countdown;
pub mod date_store;
pub mod error;
pub mod field;
pub mod selector;
pub mod state;
pub mod target;
pub mod ticker;
