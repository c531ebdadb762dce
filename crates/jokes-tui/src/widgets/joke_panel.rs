//! Content panel: the joke, the loading line, or the error message.

use jokes_app::ViewState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub const IDLE_HINT: &str = "Press Enter to get a joke.";
pub const LOADING_TEXT: &str = "Loading joke...";

// Braille spinner characters, one per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Renders exactly one of the four view states
pub struct JokePanel<'a> {
    view: &'a ViewState,
    spinner_frame: usize,
}

impl<'a> JokePanel<'a> {
    pub fn new(view: &'a ViewState) -> Self {
        Self {
            view,
            spinner_frame: 0,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn content(&self) -> Line<'a> {
        match self.view {
            ViewState::Idle => Line::from(Span::styled(IDLE_HINT, styles::text_muted())),
            ViewState::Loading => {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                Line::from(vec![
                    Span::styled(spinner, styles::accent_bold()),
                    Span::raw(" "),
                    Span::styled(LOADING_TEXT, styles::text_secondary()),
                ])
            }
            ViewState::Failed(message) => {
                Line::from(Span::styled(message.as_str(), styles::status_red()))
            }
            ViewState::Loaded(joke) => {
                Line::from(Span::styled(joke.as_str(), styles::text_primary()))
            }
        }
    }
}

impl Widget for JokePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Joke ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let paragraph = Paragraph::new(self.content())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        // Vertically center on the wrapped height; overflow is top aligned
        let wrapped = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
        let rows = wrapped.clamp(1, inner.height);
        let top = inner.y + (inner.height - rows) / 2;
        let text_area = Rect::new(inner.x, top, inner.width, inner.height - (top - inner.y));

        paragraph.render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use jokes_core::{Joke, FETCH_FAILED_MESSAGE};
    use ratatui::style::Color;

    fn render(view: &ViewState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(JokePanel::new(view), term.area());
        term
    }

    #[test]
    fn test_idle_shows_hint() {
        let term = render(&ViewState::Idle);
        assert!(term.buffer_contains(IDLE_HINT));
    }

    #[test]
    fn test_loading_shows_loading_text_only() {
        let term = render(&ViewState::Loading);
        assert!(term.buffer_contains("Loading joke..."));
        assert!(!term.buffer_contains(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn test_loaded_shows_joke() {
        let term = render(&ViewState::Loaded(Joke::new("It works on my machine.")));
        assert!(term.buffer_contains("It works on my machine."));
        assert!(!term.buffer_contains("Loading joke..."));
    }

    #[test]
    fn test_failed_shows_message_in_red() {
        let term = render(&ViewState::Failed(FETCH_FAILED_MESSAGE.to_string()));
        let content = term.content();
        assert!(content.contains("Failed to fetch joke."));

        // Find the first cell of the message and check its color
        let buffer = term.buffer();
        let cell = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| &buffer[pos])
            .find(|cell| cell.symbol() == "F")
            .expect("error text rendered");
        assert_eq!(cell.fg, Color::Red);
    }

    #[test]
    fn test_long_joke_wraps_inside_panel() {
        let joke = "word ".repeat(40);
        let mut term = TestTerminal::with_size(30, 12);
        let view = ViewState::Loaded(Joke::new(joke.trim()));
        term.render_widget(JokePanel::new(&view), term.area());

        assert!(term.buffer_contains("word word"));
    }

    #[test]
    fn test_joke_filling_panel_exactly_keeps_every_line() {
        // 30x12 leaves a 28x10 inner area; each 20-char word takes its own row
        let words: Vec<String> = (0..10).map(|i| format!("w{}{}", i, "x".repeat(18))).collect();
        let view = ViewState::Loaded(Joke::new(words.join(" ")));
        let mut term = TestTerminal::with_size(30, 12);
        term.render_widget(JokePanel::new(&view), term.area());

        for (row, word) in words.iter().enumerate() {
            assert!(
                term.line_contains(row as u16 + 1, word),
                "missing {} on row {}",
                word,
                row + 1
            );
        }
    }

    #[test]
    fn test_wrapped_joke_is_vertically_centered() {
        // Two wrapped rows in a 10-row inner area start at row 1 + 4
        let view = ViewState::Loaded(Joke::new(format!("{} {}", "a".repeat(20), "b".repeat(20))));
        let mut term = TestTerminal::with_size(30, 12);
        term.render_widget(JokePanel::new(&view), term.area());

        assert!(term.line_contains(5, &"a".repeat(20)));
        assert!(term.line_contains(6, &"b".repeat(20)));
    }

    #[test]
    fn test_spinner_frame_selects_glyph() {
        let mut term = TestTerminal::new();
        let view = ViewState::Loading;
        term.render_widget(JokePanel::new(&view).spinner_frame(1), term.area());
        assert!(term.buffer_contains("⠙"));
    }
}
