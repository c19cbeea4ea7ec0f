//! Reusable layout builders.
//!
//! Rendering and pointer hit-testing both go through these functions so a
//! click always lands on the rectangle that was drawn.

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use xrule_core::{Field, Fields};

use super::theme::{
    EQUALS_WIDTH, FIELD_HEIGHT, FIELD_WIDTH, HELP_BAR_HEIGHT, ICON_WIDTH, SCREEN_MARGIN,
    TITLE_HEIGHT,
};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split a title area into title text and the icon slot on the right.
///
/// Returns (title_text_area, icon_area)
pub fn title_with_icon(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(ICON_WIDTH)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Rectangles of the `A/B = C/D` proportion grid
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorGrid {
    pub fields: Fields<Rect>,
    /// One-line slot under each field for its error message
    pub errors: Fields<Rect>,
    /// Fraction bars of the left and right fraction
    pub bars: [Rect; 2],
    pub equals: Rect,
    pub status: Rect,
}

pub fn calculator_grid(content: Rect) -> CalculatorGrid {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(content);

    let columns = Layout::horizontal([
        Constraint::Length(FIELD_WIDTH),
        Constraint::Length(EQUALS_WIDTH),
        Constraint::Length(FIELD_WIDTH),
    ])
    .flex(Flex::Center)
    .split(content);

    let cell = |row: Rect, column: Rect| Rect::new(column.x, row.y, column.width, row.height);
    let (left, middle, right) = (columns[0], columns[1], columns[2]);
    let (top, top_error, bar, bottom, bottom_error) = (rows[1], rows[2], rows[3], rows[4], rows[5]);

    CalculatorGrid {
        fields: Fields::new(
            cell(top, left),
            cell(bottom, left),
            cell(top, right),
            cell(bottom, right),
        ),
        errors: Fields::new(
            cell(top_error, left),
            cell(bottom_error, left),
            cell(top_error, right),
            cell(bottom_error, right),
        ),
        bars: [cell(bar, left), cell(bar, right)],
        equals: cell(bar, middle),
        status: rows[7],
    }
}

/// Interactive regions of the calculator screen
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorAreas {
    pub icon: Rect,
    pub fields: Fields<Rect>,
}

/// Interactive regions for a frame of the given size
pub fn calculator_areas(area: Rect) -> CalculatorAreas {
    let (title_area, content_area, _) = screen_layout(area);
    let (_, icon) = title_with_icon(title_area);
    let grid = calculator_grid(content_area);

    CalculatorAreas {
        icon,
        fields: grid.fields,
    }
}

/// Which field box, if any, contains the given cell
pub fn field_at(areas: &CalculatorAreas, column: u16, row: u16) -> Option<Field> {
    areas
        .fields
        .iter()
        .find(|(_, rect)| rect.contains((column, row).into()))
        .map(|(field, _)| field)
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Large popup (70% x 70%) - for the help screen
    pub const LARGE: (u16, u16) = (70, 70);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_places_fractions_side_by_side() {
        let grid = calculator_grid(Rect::new(0, 0, 80, 20));

        let (a, b, c, d) = (
            grid.fields[Field::A],
            grid.fields[Field::B],
            grid.fields[Field::C],
            grid.fields[Field::D],
        );
        assert_eq!(a.x, b.x);
        assert_eq!(c.x, d.x);
        assert!(a.x < c.x);
        assert_eq!(a.y, c.y);
        assert!(a.y < b.y);
        assert_eq!(a.width, FIELD_WIDTH);
        assert_eq!(a.height, FIELD_HEIGHT);
        assert!(grid.equals.x > a.x && grid.equals.x < c.x);
    }

    #[test]
    fn icon_sits_at_right_of_title() {
        let areas = calculator_areas(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.icon.y, SCREEN_MARGIN);
        assert_eq!(areas.icon.x + areas.icon.width, 100 - SCREEN_MARGIN);
        assert_eq!(areas.icon.width, ICON_WIDTH);
    }

    #[test]
    fn field_hit_testing() {
        let areas = calculator_areas(Rect::new(0, 0, 100, 30));
        let d = areas.fields[Field::D];

        assert_eq!(field_at(&areas, d.x, d.y), Some(Field::D));
        assert_eq!(field_at(&areas, 0, 0), None);
    }
}
