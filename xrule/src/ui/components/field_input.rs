use ratatui::{
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use xrule_core::Field;

use crate::state::FieldState;
use crate::ui::theme::{self, Palette};

/// Render one field box plus its error message slot.
///
/// The terminal cursor is placed after the text of the focused field.
pub fn render_field(
    f: &mut Frame,
    area: Rect,
    error_area: Rect,
    field: Field,
    state: &FieldState,
    focused: bool,
    palette: &Palette,
) {
    let border_style = theme::field_border_style(
        palette,
        focused,
        state.error.is_some(),
        state.just_computed,
    );

    let title = if state.just_computed {
        format!(" {} = ", field)
    } else {
        format!(" {} ", field)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let len = state.text.chars().count() as u16;
    let offset = scroll_offset(len, inner.width);

    let text = Paragraph::new(Span::styled(
        state.text.as_str(),
        theme::field_text_style(palette, state.just_computed),
    ))
    .scroll((0, offset))
    .block(block);
    f.render_widget(text, area);

    if focused && inner.width > 0 {
        let cursor = (len - offset).min(inner.width - 1);
        f.set_cursor_position(Position::new(inner.x + cursor, inner.y));
    }

    if let Some(error) = state.error {
        let message = Paragraph::new(Span::styled(
            error.to_string(),
            theme::error_message_style(palette),
        ));
        f.render_widget(message, error_area);
    }
}

/// Columns to scroll so the end of the text and the cursor cell stay visible
fn scroll_offset(len: u16, width: u16) -> u16 {
    (len + 1).saturating_sub(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_row(text: &str, width: u16) -> String {
        let state = FieldState {
            text: text.to_string(),
            just_computed: true,
            ..Default::default()
        };
        let mut terminal = Terminal::new(TestBackend::new(width, 4)).unwrap();
        terminal
            .draw(|f| {
                render_field(
                    f,
                    Rect::new(0, 0, width, 3),
                    Rect::new(0, 3, width, 1),
                    Field::A,
                    &state,
                    false,
                    &Palette::LIGHT,
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = width as usize;
        buffer.content()[row..2 * row]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn short_text_is_not_scrolled() {
        assert_eq!(scroll_offset(0, 26), 0);
        assert_eq!(scroll_offset(25, 26), 0);
        assert!(render_row("12,5", 28).starts_with("│12,5"));
    }

    #[test]
    fn long_result_keeps_its_end_visible() {
        assert_eq!(scroll_offset(26, 26), 1);
        assert_eq!(scroll_offset(31, 26), 6);

        let long = "1000000000000000019884624838656";
        let row = render_row(long, 28);

        // 26 inner columns: the last 25 digits plus the cursor cell
        assert!(row.contains(&long[long.len() - 25..]), "row was {:?}", row);
        assert!(!row.contains(long));
    }
}
