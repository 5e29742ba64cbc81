use crate::app::state::*;
use crate::contact::form::{FormField, FormStatus};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub const SUCCESS_NOTICE: &str = "Message sent successfully!";
pub const ERROR_NOTICE: &str = "Oops! Something went wrong. Please try again.";

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// The notice shown under the form, if any. Only `Success` and `Error`
/// produce one.
pub fn notice(status: FormStatus) -> Option<(&'static str, Style)> {
    match status {
        FormStatus::Success => Some((SUCCESS_NOTICE, Theme::success())),
        FormStatus::Error => Some((ERROR_NOTICE, Theme::error())),
        FormStatus::None | FormStatus::Loading => None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Send Us a Message ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Min(4),    // Message
            Constraint::Length(1), // Send button
            Constraint::Length(1), // Notice
        ])
        .split(inner);

    render_field(frame, chunks[0], state, FormField::Name);
    render_field(frame, chunks[1], state, FormField::Email);
    render_field(frame, chunks[2], state, FormField::Message);
    render_send_button(frame, chunks[3], state);

    if let Some((text, style)) = notice(state.store.form_status()) {
        let paragraph = Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[4]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, state: &AppState, field: FormField) {
    let focused = state.focus.field() == Some(field);
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(format!(" {}", field.label()), Theme::label()),
            Span::styled(" * ", Style::default().fg(Theme::ACCENT_RED)),
        ]))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Theme::field_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // The displayed value is always the store's value
    let text = state.store.form_data().field(field);
    let (row, col) = cursor_position(text, state.cursor(field));
    let scroll_y = row.saturating_sub(inner.height.saturating_sub(1));
    let scroll_x = col.saturating_sub(inner.width.saturating_sub(1));

    let lines: Vec<Line> = text
        .split('\n')
        .map(|l| Line::from(Span::styled(l, Theme::input_text())))
        .collect();
    let paragraph = Paragraph::new(lines).scroll((scroll_y, scroll_x));
    frame.render_widget(paragraph, inner);

    if focused {
        frame.set_cursor_position((inner.x + col - scroll_x, inner.y + row - scroll_y));
    }
}

fn render_send_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Send;
    let (label, style) = if state.store.form_status().is_loading() {
        let frame_idx = (state.tick_count / 3) as usize % SPINNER.len();
        (format!(" {} Sending... ", SPINNER[frame_idx]), Theme::button_busy())
    } else if focused {
        ("  ➤ Send Message  ".to_string(), Theme::button_focused())
    } else {
        ("  ➤ Send Message  ".to_string(), Theme::button())
    };

    let paragraph = Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Row and display column of byte offset `cursor` in `text`.
fn cursor_position(text: &str, cursor: usize) -> (u16, u16) {
    let before = &text[..cursor];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = UnicodeWidthStr::width(&before[line_start..]);
    (row as u16, col as u16)
}
