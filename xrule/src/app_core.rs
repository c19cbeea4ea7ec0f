use crate::commands::handlers;
use crate::events::{AppCommand, AppEvent};
use crate::input::{KeyEvent, PointerEvent};
use crate::state::{reducer, AppState};
use crate::ui::layouts::CalculatorAreas;

/// Trait for handling command execution (production = real storage + timers, test = mock)
///
/// This trait abstracts the side effects of command execution, allowing tests
/// to inject a mock implementation that doesn't touch the filesystem or spawn tasks.
pub trait CommandHandler {
    /// Execute a command with access to mutable state
    ///
    /// In production, this persists preferences and spawns timer tasks.
    /// In tests, this can record the requested effects instead.
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Testable application core without terminal dependencies
///
/// Generic over H (handler) for zero-cost abstraction. The handler type determines
/// how command side effects are carried out.
pub struct AppCore<H: CommandHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: CommandHandler> AppCore<H> {
    /// Create a new application core with the given handler and initial state
    pub fn new(handler: H, ui_state: AppState) -> Self {
        Self { ui_state, handler }
    }

    /// Handle keyboard input and execute the resulting command
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Handle pointer input against the areas of the last drawn frame
    pub fn handle_pointer(&mut self, event: PointerEvent, areas: &CalculatorAreas) {
        if let Some(command) = handlers::handle_pointer_input(event, &self.ui_state, areas) {
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Handle an event from a background task (or injected by a test)
    pub fn handle_app_event(&mut self, event: AppEvent) {
        reducer::reduce_app_event(&mut self.ui_state, event);
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
