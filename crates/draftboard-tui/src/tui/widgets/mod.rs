// TUI widget modules for each dashboard panel.

pub mod header;
pub mod players;
pub mod roster;
pub mod suggestions;
