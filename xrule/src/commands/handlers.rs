use ratatui::layout::Position;
use xrule_core::Field;

use crate::events::AppCommand;
use crate::input::{Key, KeyEvent, PointerEvent, PointerKind};
use crate::state::AppState;
use crate::ui::layouts::{self, CalculatorAreas};

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Ctrl chords work everywhere
    if event.modifiers.ctrl {
        return match key {
            Key::Char('c') | Key::Char('q') => Some(AppCommand::Quit),
            Key::Char('r') => Some(AppCommand::Reset),
            Key::Char('t') => Some(AppCommand::ToggleTheme),
            _ => None,
        };
    }

    // Priority 1: help popup swallows everything but its own toggles
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc | Key::F1 => Some(AppCommand::ToggleHelp),
            _ => None,
        };
    }

    let focused = state.calculator.focused;
    match key {
        Key::Enter => Some(AppCommand::Calculate),
        Key::Tab => Some(AppCommand::FocusNextField),
        Key::BackTab => Some(AppCommand::FocusPreviousField),
        Key::Up | Key::Down | Key::Left | Key::Right => {
            Some(AppCommand::FocusField(spatial_neighbor(focused, key)))
        }
        Key::Backspace => Some(AppCommand::DeleteChar),
        Key::Esc => Some(AppCommand::ClearField),
        Key::F1 | Key::Char('?') => Some(AppCommand::ToggleHelp),
        Key::Char(c) if !c.is_control() => Some(AppCommand::AppendChar(c)),
        Key::Char(_) => None,
    }
}

/// Map a pointer event to a command using the areas of the last drawn frame
pub fn handle_pointer_input(
    event: PointerEvent,
    state: &AppState,
    areas: &CalculatorAreas,
) -> Option<AppCommand> {
    let position = Position::new(event.column, event.row);
    let over_icon = areas.icon.contains(position);

    match event.kind {
        PointerKind::Moved => match (over_icon, state.icon.hovered) {
            (true, false) => Some(AppCommand::IconPointerEnter),
            (false, true) => Some(AppCommand::IconPointerLeave),
            _ => None,
        },
        PointerKind::Pressed if over_icon => Some(AppCommand::IconActivate),
        PointerKind::Pressed if state.help_visible => None,
        PointerKind::Pressed => {
            layouts::field_at(areas, event.column, event.row).map(AppCommand::FocusField)
        }
    }
}

/// Arrow-key movement on the `A/B = C/D` grid.
///
/// Up/Down move between numerator and denominator of one fraction,
/// Left/Right between the two fractions.
fn spatial_neighbor(field: Field, key: Key) -> Field {
    match (field, key) {
        (Field::A, Key::Down) | (Field::D, Key::Left) => Field::B,
        (Field::B, Key::Up) | (Field::C, Key::Left) => Field::A,
        (Field::A, Key::Right) | (Field::D, Key::Up) => Field::C,
        (Field::B, Key::Right) | (Field::C, Key::Down) => Field::D,
        (field, _) => field,
    }
}
