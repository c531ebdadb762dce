//! Bottom bar holding the "Get New Joke" button and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const BUTTON_LABEL: &str = "Get New Joke";

/// The fetch button is always drawn and always clickable, even mid-request.
pub struct ActionBar<'a> {
    endpoint: &'a str,
}

impl<'a> ActionBar<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }

    fn button_line() -> Line<'static> {
        Line::from(Span::styled(
            format!(" {} ", BUTTON_LABEL),
            styles::focused_selected(),
        ))
    }

    /// Screen cells covered by the button when the bar is drawn in `area`.
    ///
    /// Empty when the bar has no room for it.
    pub fn button_area(area: Rect) -> Rect {
        let inner = styles::glass_block(false).inner(area);
        if inner.height == 0 || inner.width <= 1 {
            return Rect::new(inner.x, inner.y, 0, 0);
        }
        let width = (Self::button_line().width() as u16).min(inner.width - 1);
        Rect::new(inner.x + 1, inner.y, width, 1)
    }
}

impl Widget for ActionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let button = Self::button_area(area);
        if button.width == 0 {
            return;
        }
        buf.set_line(button.x, button.y, &Self::button_line(), button.width);

        let hints = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] Fetch  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit", styles::text_muted()),
        ]);
        let hints_x = button.x + button.width + 2;
        let inner_right = inner.x + inner.width;
        if hints_x >= inner_right {
            return;
        }
        let hints_width = hints.width() as u16;
        buf.set_line(hints_x, inner.y, &hints, inner_right - hints_x);

        // Endpoint goes right-aligned when there is room left after the hints
        let endpoint = Line::from(vec![
            Span::styled(self.endpoint, styles::text_muted()),
            Span::raw(" "),
        ]);
        let endpoint_width = endpoint.width() as u16;
        let used = hints_x + hints_width + 2;
        if used + endpoint_width <= inner_right {
            buf.set_line(inner_right - endpoint_width, inner.y, &endpoint, endpoint_width);
        }
    }
}
