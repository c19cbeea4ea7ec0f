//! Title bar: application name and theme on the left, cat icon on the right.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::AppState;
use crate::ui::{
    layouts,
    theme::{self, Palette},
};

use super::cat_icon;

pub fn render_screen_title(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (title_area, icon_area) = layouts::title_with_icon(area);

    let title = Line::from(vec![
        Span::styled("Rule of three", theme::title_style(palette)),
        Span::styled(
            format!("  ·  {} theme", state.theme),
            theme::help_text_style(palette),
        ),
    ]);
    f.render_widget(Paragraph::new(title), title_area);

    cat_icon::render_cat_icon(f, icon_area, &state.icon, palette);
}
