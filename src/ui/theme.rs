use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 20, 26);
    pub const BG_SURFACE: Color = Color::Rgb(28, 31, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(38, 42, 54);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 92);
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 230, 238);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 158, 176);
    pub const TEXT_MUTED: Color = Color::Rgb(98, 106, 124);
    pub const ACCENT_TEAL: Color = Color::Rgb(64, 200, 190);
    pub const ACCENT_GREEN: Color = Color::Rgb(110, 210, 120);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 190, 90);
    pub const ACCENT_RED: Color = Color::Rgb(236, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn field_bg() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_focused() -> Style {
        Self::button().add_modifier(Modifier::REVERSED)
    }

    pub fn button_busy() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BORDER_DIM)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ACCENT_RED).add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }
}
