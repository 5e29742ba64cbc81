use crate::config::model::SupportConfig;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, support: &SupportConfig) {
    let block = Block::default()
        .title(" Support ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());

    let mut lines = vec![
        Line::from(Span::styled(support.specialist_name.as_str(), Theme::heading()))
            .alignment(Alignment::Center),
        Line::from(Span::styled(support.specialist_title.as_str(), Theme::subtitle()))
            .alignment(Alignment::Center),
        Line::default(),
    ];

    lines.extend(option("✉ ", "Email Support", Span::styled(support.email.as_str(), Theme::link())));
    lines.extend(option(
        "☎ ",
        "Phone Support",
        Span::styled(support.phone.as_str(), Theme::input_text()),
    ));
    lines.extend(option(
        "✆ ",
        &support.messenger_label,
        Span::styled(support.messenger_handle.as_str(), Theme::link()),
    ));
    lines.push(Line::from(Span::styled(
        format!("   {}", support.messenger_url),
        Style::default().fg(Theme::TEXT_MUTED),
    )));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One contact method: icon and label on the first line, value below it.
fn option<'a>(icon: &'a str, label: &'a str, value: Span<'a>) -> [Line<'a>; 2] {
    [
        Line::from(vec![
            Span::styled(icon, Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(label, Theme::heading()),
        ]),
        Line::from(vec![Span::raw("   "), value]),
    ]
}
