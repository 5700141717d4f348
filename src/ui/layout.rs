//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Tab strip on top, event log below, status bar at the bottom.
pub struct AppLayout {
    pub strip_area: Rect,
    pub log_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // titles + underline inside a border
                Constraint::Min(3),    // event log
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            strip_area: chunks[0],
            log_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
