use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const HEADLINE: &str = "Contact Our Support Team";
pub const SUBTITLE: &str =
    "We're here to assist you with any questions or concerns. Reach out through your preferred method.";

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(HEADLINE, Theme::heading())),
        Line::from(Span::styled(SUBTITLE, Theme::subtitle())),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Theme::BG_DARK));
    frame.render_widget(paragraph, area);
}
