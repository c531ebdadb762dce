//! Main render/view function (View in TEA pattern)


use jokes_app::state::{AppState, HitBox};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this records where the fetch button landed so mouse
/// clicks can be hit-tested by the update loop.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let header = widgets::MainHeader::new(&state.settings.ui.title, &state.view);
    frame.render_widget(header, areas.header);

    let panel = widgets::JokePanel::new(&state.view).spinner_frame(state.spinner_frame);
    frame.render_widget(panel, areas.content);

    frame.render_widget(widgets::ActionBar::new(&state.endpoint), areas.action_bar);

    let button = widgets::ActionBar::button_area(areas.action_bar);
    state.button_area = (button.width > 0)
        .then(|| HitBox::new(button.x, button.y, button.width, button.height));
}
