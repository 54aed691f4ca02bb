use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenAreas {
    pub header: Rect,
    pub url: Rect,
    pub max_pages: Rect,
    pub max_depth: Rect,
    pub status: Rect,
    pub stats: Rect,
    pub footer: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // url input
            Constraint::Length(3), // count inputs
            Constraint::Length(1), // status line
            Constraint::Length(3), // stats block
            Constraint::Min(0),    // filler
            Constraint::Length(1), // footer
        ])
        .split(area);

    let counts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    ScreenAreas {
        header: rows[0],
        url: rows[1],
        max_pages: counts[0],
        max_depth: counts[1],
        status: rows[3],
        stats: rows[4],
        footer: rows[6],
    }
}

/// Centers a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
