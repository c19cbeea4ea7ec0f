//! Bottom key hint bar.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{self, Palette};

/// Render the help bar with the given text, gray and centered in a bordered block.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style(palette))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(ratatui::style::Style::default().fg(palette.border)),
        );

    f.render_widget(help, area);
}

pub const HELP_TEXT_DEFAULT: &str =
    "Enter: solve  Tab: next field  Esc: clear field  Ctrl+R: reset  Ctrl+T: theme  ?: help";
