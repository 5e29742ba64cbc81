mod contact_form;
mod hero;
mod layout;
mod status_bar;
mod support_card;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::Theme::BG_DARK)), area);

    let app_layout = layout::compute_layout(area);

    hero::render(frame, app_layout.hero);
    support_card::render(frame, app_layout.support_card, &state.config.support);
    contact_form::render(frame, app_layout.contact_form, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
