use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the support card stacks above the form.
const TWO_COLUMN_MIN_WIDTH: u16 = 90;

pub struct AppLayout {
    pub hero: Rect,
    pub support_card: Rect,
    pub contact_form: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: hero | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Hero
            Constraint::Min(10),   // Card + form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let hero = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    let content_chunks = if area.width >= TWO_COLUMN_MIN_WIDTH {
        Layout::default()
            .direction(Direction::Horizontal)
            .spacing(2)
            .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
            .split(content)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(11), Constraint::Min(14)])
            .split(content)
    };

    AppLayout {
        hero,
        support_card: content_chunks[0],
        contact_form: content_chunks[1],
        status_bar,
    }
}
