pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::state::AppState;
use ratatui::{widgets::Block, Frame};
use theme::Palette;

/// Pure render dispatcher
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    let palette = Palette::for_theme(state.theme);

    // Paint the theme background under everything
    f.render_widget(Block::default().style(theme::base_style(&palette)), f.area());

    screens::calculator_screen::render(f, state, &palette);

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, &palette);
    }
}
