// Library root: exposes the modules so integration tests can drive the
// dashboard without a terminal.

pub mod app;
pub mod config;
pub mod tui;
