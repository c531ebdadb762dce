//! Color palette for the joke dispenser.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text drawn on an accent background

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Joke loaded
pub const STATUS_RED: Color = Color::Red; // Fetch failed
pub const STATUS_YELLOW: Color = Color::Yellow; // Loading, key hints

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_color_is_red() {
        assert_eq!(STATUS_RED, Color::Red);
    }

    #[test]
    fn test_button_text_contrasts_with_accent() {
        assert_ne!(CONTRAST_FG, ACCENT);
    }
}
