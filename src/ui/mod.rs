//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! Widgets read the navigator's title views and event log; none of them
//! talk to the dispatcher directly.

pub mod event_log;
pub mod layout;
pub mod tab_strip;
pub mod theme;
