//! Screen layout definitions for the TUI
//!
//! The form screen puts the input panels beside the result panel on wide
//! terminals and stacks them on narrow ones.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width at which the form switches to a side-by-side layout
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title + mode + server)
    pub header: Rect,

    /// Mode cards or the form
    pub body: Rect,

    /// Key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Areas of the form screen
#[derive(Debug, Clone, Copy)]
pub struct FormAreas {
    pub inputs: Rect,
    pub result: Rect,
}

/// Split the body between the input panels and the result panel
pub fn split_form(body: Rect) -> FormAreas {
    let chunks = if body.width >= WIDE_LAYOUT_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(body)
    } else {
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).split(body)
    };

    FormAreas {
        inputs: chunks[0],
        result: chunks[1],
    }
}
