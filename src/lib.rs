//! Countdown library exports for the binary and tests

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
