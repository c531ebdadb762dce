//! Custom widget components

mod action_bar;
mod header;
mod joke_panel;

pub use action_bar::{ActionBar, BUTTON_LABEL};
pub use header::MainHeader;
pub use joke_panel::{JokePanel, IDLE_HINT, LOADING_TEXT};
