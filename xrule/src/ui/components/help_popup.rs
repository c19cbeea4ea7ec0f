use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::ui::{
    layouts,
    theme::{self, Palette},
};

/// Centered help overlay listing every key binding
pub fn render_help_popup(f: &mut Frame, palette: &Palette) {
    let (width, height) = layouts::popup_sizes::LARGE;
    let area = layouts::centered_popup(width, height, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help (press ? or Esc to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .style(theme::base_style(palette))
        .border_style(theme::accent_border_style(palette));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(inner);

    let intro = Paragraph::new(
        "Fill three of the four fields and type x in the one to solve. \
         A / B = C / D, so 3 / 2 = 12 / x gives x = 8.",
    )
    .style(Style::default().fg(palette.foreground))
    .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[0]);

    let items: Vec<ListItem> = help_items()
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style(palette)),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(palette.foreground));

    f.render_widget(list, chunks[1]);
}

fn help_items() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Type", "Enter a number (. or , as decimal separator) or x"),
        ("Enter", "Solve for the x field, or check the numbers"),
        ("Tab/Shift+Tab", "Next / previous field"),
        ("Arrows", "Move around the A/B = C/D grid"),
        ("Backspace", "Delete last character"),
        ("Esc", "Clear the focused field"),
        ("Click", "Focus a field; wake the cat"),
        ("", ""),
        ("--- Global ---", ""),
        ("Ctrl+R", "Reset all fields"),
        ("Ctrl+T", "Toggle light/dark theme"),
        ("?/F1", "Toggle this help"),
        ("Ctrl+C/Ctrl+Q", "Quit application"),
    ]
}
