use crate::events::AppCommand;
use crate::state::AppState;
use xrule_core::Outcome;
use xrule_prefs::Theme;

/// Side effects a command asks the runtime to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the theme preference back to storage
    PersistTheme(Theme),
    /// Post `AppEvent::IconRevert { generation }` after the configured delay
    ScheduleIconRevert { generation: u64 },
}

/// Apply a command to the UI state.
///
/// State changes happen here synchronously; anything touching storage or timers
/// is returned as an [`Effect`] for the caller's handler to carry out.
pub fn execute_command(command: AppCommand, state: &mut AppState) -> Option<Effect> {
    match command {
        AppCommand::FocusNextField => {
            state.calculator.focused = state.calculator.focused.next();
        }
        AppCommand::FocusPreviousField => {
            state.calculator.focused = state.calculator.focused.previous();
        }
        AppCommand::FocusField(field) => {
            state.calculator.focused = field;
        }

        AppCommand::AppendChar(c) => state.calculator.append_char(c),
        AppCommand::DeleteChar => state.calculator.delete_char(),
        AppCommand::ClearField => state.calculator.clear_focused(),

        AppCommand::Calculate => {
            let outcome = xrule_core::calculate(&mut state.calculator, &state.format);
            match &outcome {
                Outcome::Solved { field, value } => {
                    tracing::info!("Solved {} = {}", field, value);
                    state.calculator.focused = *field;
                }
                Outcome::Validated => tracing::debug!("Fields validated, nothing to solve"),
                Outcome::Rejected { errors } => {
                    tracing::info!("Calculation rejected: {} field(s) invalid", errors.len());
                }
            }
            state.calculator.last_outcome = Some(outcome);
        }
        AppCommand::Reset => {
            xrule_core::reset(&mut state.calculator);
            state.calculator.focused = xrule_core::Field::A;
            state.calculator.last_outcome = None;
            tracing::debug!("Calculator reset");
        }

        AppCommand::ToggleTheme => {
            state.theme = state.theme.toggle();
            tracing::info!("Theme switched to {}", state.theme);
            return Some(Effect::PersistTheme(state.theme));
        }
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,

        AppCommand::IconPointerEnter => state.icon.pointer_enter(),
        AppCommand::IconPointerLeave => state.icon.pointer_leave(),
        AppCommand::IconActivate => {
            let generation = state.icon.activate();
            return Some(Effect::ScheduleIconRevert { generation });
        }

        AppCommand::Quit => state.should_quit = true,
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrule_core::{Field, FieldAccess};

    #[test]
    fn toggle_theme_requests_persistence() {
        let mut state = AppState::default();
        let effect = execute_command(AppCommand::ToggleTheme, &mut state);

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(effect, Some(Effect::PersistTheme(Theme::Dark)));
    }

    #[test]
    fn calculate_focuses_solved_field() {
        let mut state = AppState::default();
        state.calculator.set_value(Field::A, "2".into());
        state.calculator.set_value(Field::B, "4".into());
        state.calculator.set_value(Field::C, "x".into());
        state.calculator.set_value(Field::D, "8".into());

        let effect = execute_command(AppCommand::Calculate, &mut state);

        assert_eq!(effect, None);
        assert_eq!(state.calculator.focused, Field::C);
        assert_eq!(state.calculator.field(Field::C).text, "4");
        assert!(matches!(
            state.calculator.last_outcome,
            Some(Outcome::Solved { field: Field::C, .. })
        ));
    }

    #[test]
    fn icon_activation_schedules_revert() {
        let mut state = AppState::default();
        let first = execute_command(AppCommand::IconActivate, &mut state);
        let second = execute_command(AppCommand::IconActivate, &mut state);

        assert_eq!(first, Some(Effect::ScheduleIconRevert { generation: 1 }));
        assert_eq!(second, Some(Effect::ScheduleIconRevert { generation: 2 }));
    }
}
