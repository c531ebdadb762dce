//! Semantic style builders.

use jokes_app::ViewState;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    status_yellow()
}

/// "Black on Cyan" - used for the fetch button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- View indicator mapping ---

/// Status indicator for the header.
///
/// Returns `(icon_char, label, Style)` for the given view.
pub fn view_indicator(view: &ViewState) -> (&'static str, &'static str, Style) {
    match view {
        ViewState::Idle => ("○", "Idle", Style::default().fg(palette::TEXT_MUTED)),
        ViewState::Loading => (
            "↻",
            "Loading",
            status_yellow().add_modifier(Modifier::BOLD),
        ),
        ViewState::Loaded(_) => (
            "●",
            "Ready",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        ViewState::Failed(_) => ("✗", "Error", Style::default().fg(palette::STATUS_RED)),
    }
}
