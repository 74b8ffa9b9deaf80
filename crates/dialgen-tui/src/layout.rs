//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;
/// Generator panel: borders + country row + count row + status row
const GENERATOR_HEIGHT: u16 = 5;
/// Status bar: single row of key hints and notices
const STATUS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title and selected country
    pub header: Rect,

    /// Country, count input and generation state
    pub generator: Rect,

    /// Paged result list (takes the remaining space)
    pub results: Rect,

    /// Key hints and transient notices
    pub status: Rect,
}

/// Split the screen into header, generator panel, results and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(GENERATOR_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        generator: chunks[1],
        results: chunks[2],
        status: chunks[3],
    }
}

/// Rows of the results panel left for list items once borders and the
/// summary line are taken
pub fn visible_result_rows(results_area: Rect) -> usize {
    results_area.height.saturating_sub(3) as usize
}
