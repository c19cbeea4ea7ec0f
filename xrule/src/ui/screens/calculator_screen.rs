use ratatui::{prelude::*, widgets::Paragraph};
use xrule_core::{Field, Outcome};

use crate::state::{AppState, CalculatorState};
use crate::ui::{
    components::{field_input, help_bar, screen_title},
    layouts,
    theme::{self, Palette},
};

pub fn render(f: &mut Frame, state: &AppState, palette: &Palette) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, state, palette);
    render_content(f, content_area, &state.calculator, state.help_visible, palette);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_DEFAULT, palette);
}

fn render_content(
    f: &mut Frame,
    area: Rect,
    calculator: &CalculatorState,
    help_visible: bool,
    palette: &Palette,
) {
    let grid = layouts::calculator_grid(area);

    for field in Field::ALL {
        field_input::render_field(
            f,
            grid.fields[field],
            grid.errors[field],
            field,
            calculator.field(field),
            // No cursor while the help popup covers the form
            !help_visible && calculator.focused == field,
            palette,
        );
    }

    let bar_style = Style::default().fg(palette.muted);
    for bar in grid.bars {
        let line = "─".repeat(bar.width as usize);
        f.render_widget(Paragraph::new(line).style(bar_style), bar);
    }
    f.render_widget(
        Paragraph::new("=")
            .alignment(Alignment::Center)
            .style(theme::title_style(palette)),
        grid.equals,
    );

    let status = Paragraph::new(status_line(calculator, palette)).alignment(Alignment::Center);
    f.render_widget(status, grid.status);
}

/// One-line summary of the last calculation
fn status_line(calculator: &CalculatorState, palette: &Palette) -> Span<'static> {
    match &calculator.last_outcome {
        Some(Outcome::Solved { field, .. }) => Span::styled(
            format!("{} = {}", field, calculator.field(*field).text),
            Style::default()
                .fg(palette.computed)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Outcome::Validated) => Span::styled(
            "All numbers look good. Type x in the field to solve.",
            theme::help_text_style(palette),
        ),
        Some(Outcome::Rejected { .. }) if calculator.has_errors() => Span::styled(
            "Fix the highlighted fields and press Enter",
            theme::error_message_style(palette),
        ),
        _ => Span::styled(
            "Type x in the field to solve for",
            theme::help_text_style(palette),
        ),
    }
}
