//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Action bar height: top border + button row + bottom border
pub const ACTION_BAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with the fetch status indicator
    pub header: Rect,

    /// Joke, loading or error panel
    pub content: Rect,

    /// "Get New Joke" button and key hints
    pub action_bar: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(ACTION_BAR_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        action_bar: chunks[2],
    }
}
