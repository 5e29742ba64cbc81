use crate::app::state::*;
use crate::contact::form::FormStatus;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HELP: &str = " Tab next · Ctrl+S send · Esc quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let status_style = if state.status_message.is_some() {
        Theme::hint().bg(Theme::BG_ELEVATED)
    } else {
        match state.store.form_status() {
            FormStatus::Success => Theme::success().bg(Theme::BG_ELEVATED),
            FormStatus::Error => Theme::error().bg(Theme::BG_ELEVATED),
            _ => Theme::status_bar(),
        }
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + HELP.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        HELP,
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
