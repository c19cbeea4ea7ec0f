use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::state::{IconFace, IconState};
use crate::ui::theme::Palette;

pub const SLEEPING: &str = "(=-.-=)zZ";
pub const HELLO: &str = "(=^.^=)/";

pub fn face_text(face: IconFace) -> &'static str {
    match face {
        IconFace::Sleeping => SLEEPING,
        IconFace::Hello => HELLO,
    }
}

/// Render the decorative cat in the top-right corner
pub fn render_cat_icon(f: &mut Frame, area: Rect, icon: &IconState, palette: &Palette) {
    let style = match icon.face {
        IconFace::Sleeping => Style::default().fg(palette.muted),
        IconFace::Hello => Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    };

    let cat = Paragraph::new(Span::styled(face_text(icon.face), style)).alignment(Alignment::Right);
    f.render_widget(cat, area);
}
