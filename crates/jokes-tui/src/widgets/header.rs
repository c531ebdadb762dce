//! Header bar widget
//!
//! Shows the app title on the left and the fetch status on the right.

use jokes_app::ViewState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the title and a status pill
pub struct MainHeader<'a> {
    title: &'a str,
    view: &'a ViewState,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, view: &'a ViewState) -> Self {
        Self { title, view }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));

        // Get inner content area (inside borders) before rendering
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_label, status_style) = styles::view_indicator(self.view);

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled(self.title, styles::accent_bold()),
        ]);
        let left_width = left_line.width() as u16;

        let status_line = Line::from(vec![
            Span::styled(status_label, status_style),
            Span::raw(" "),
        ]);
        let status_width = status_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the status label when it does not collide with the title
        if left_width + status_width + 2 <= inner.width {
            let status_x = inner.x + inner.width - status_width;
            buf.set_line(status_x, inner.y, &status_line, status_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use jokes_core::Joke;

    #[test]
    fn test_header_renders_title() {
        let mut term = TestTerminal::new();
        let view = ViewState::Idle;
        term.render_widget(MainHeader::new("DevOps Joke Dispenser", &view), term.area());

        assert!(term.line_contains(1, "DevOps Joke Dispenser"));
    }

    #[test]
    fn test_header_shows_view_status() {
        let mut term = TestTerminal::new();
        let view = ViewState::Loaded(Joke::new("x"));
        term.render_widget(MainHeader::new("Jokes", &view), term.area());

        assert!(term.line_contains(1, "Ready"));
        assert!(term.line_contains(1, "●"));
    }

    #[test]
    fn test_header_narrow_terminal_drops_status() {
        let mut term = TestTerminal::with_size(20, 3);
        let view = ViewState::Loading;
        term.render_widget(MainHeader::new("DevOps Joke Dispenser", &view), term.area());

        assert!(!term.buffer_contains("Loading"));
        assert!(term.buffer_contains("DevOps"));
    }
}
