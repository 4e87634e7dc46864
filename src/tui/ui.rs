//! UI layout helpers for the player screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns per row that keep half-block pixels roughly square for an
/// 8:3 field: width / (2 * height) = 8 / 3.
const FIELD_COLS_PER_ROW: u32 = 16;
const FIELD_ROWS_PER_COLS: u32 = 3;

/// Areas of the player screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub title: Rect,
    pub status: Rect,
    pub field: Rect,
    pub progress: Rect,
    pub description: Rect,
    pub footer: Rect,
}

/// Split the screen into title, status, field, progress, description and footer.
pub fn player_layout(area: Rect) -> PlayerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    PlayerLayout {
        title: chunks[0],
        status: chunks[1],
        field: field_area(chunks[2]),
        progress: chunks[3],
        description: chunks[4],
        footer: chunks[5],
    }
}

/// Largest centered rectangle inside `area` with the field's aspect ratio.
pub fn field_area(area: Rect) -> Rect {
    let max_width_for_height =
        u32::from(area.height) * FIELD_COLS_PER_ROW / FIELD_ROWS_PER_COLS;
    let (width, height) = if u32::from(area.width) <= max_width_for_height {
        let height = u32::from(area.width) * FIELD_ROWS_PER_COLS / FIELD_COLS_PER_ROW;
        (area.width, height.max(1).min(u32::from(area.height)) as u16)
    } else {
        (max_width_for_height as u16, area.height)
    };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
