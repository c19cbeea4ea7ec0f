use crate::app_core::{AppCore, CommandHandler};
use crate::commands::{executor, Effect};
use crate::events::{AppCommand, AppEvent};
use crate::input::{Key, KeyEvent, PointerEvent};
use crate::state::AppState;
use crate::ui::layouts::{self, CalculatorAreas};
use ratatui::layout::Rect;
use xrule_core::Field;
use xrule_prefs::{MemoryStore, PreferenceStore};

/// Terminal size the test harness pretends to draw into
pub const TEST_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

/// Mock command handler for tests (no filesystem, no timers)
///
/// Commands run through the real executor; theme writes go to an in-memory
/// store and icon revert requests are queued for the test to fire.
#[derive(Default)]
pub struct MockHandler {
    pub store: MemoryStore,
    pub pending_reverts: Vec<u64>,
    pub effects: Vec<Effect>,
}

impl CommandHandler for MockHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(effect) = executor::execute_command(command, state) {
            match &effect {
                Effect::PersistTheme(theme) => {
                    self.store
                        .save_theme(theme.as_str())
                        .expect("memory store never fails");
                }
                Effect::ScheduleIconRevert { generation } => {
                    self.pending_reverts.push(*generation);
                }
            }
            self.effects.push(effect);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockHandler>,
}

impl TestApp {
    /// Create a new test app with default state and mock handler
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            core: AppCore::new(MockHandler::default(), state),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into the focused field
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Fill all four fields (A, B, C, D) through the keyboard, starting from A
    pub fn fill(&mut self, a: &str, b: &str, c: &str, d: &str) {
        let first = self.field_area(Field::A);
        self.send_pointer(PointerEvent::pressed(first.x + 1, first.y + 1));
        for text in [a, b, c, d] {
            self.send_key(Key::Esc);
            self.type_text(text);
            self.send_key(Key::Tab);
        }
    }

    /// Send a pointer event laid out against [`TEST_AREA`]
    pub fn send_pointer(&mut self, event: PointerEvent) {
        let areas = self.areas();
        self.core.handle_pointer(event, &areas);
    }

    /// Inject an app event (simulate a background timer firing)
    pub fn send_app_event(&mut self, event: AppEvent) {
        self.core.handle_app_event(event);
    }

    /// Fire every queued icon revert timer in order
    pub fn fire_reverts(&mut self) {
        let pending: Vec<u64> = self.core.handler().pending_reverts.clone();
        for generation in pending {
            self.send_app_event(AppEvent::IconRevert { generation });
        }
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn handler(&self) -> &MockHandler {
        self.core.handler()
    }

    pub fn areas(&self) -> CalculatorAreas {
        layouts::calculator_areas(TEST_AREA)
    }

    pub fn field_area(&self, field: Field) -> Rect {
        self.areas().fields[field]
    }

    /// Text currently shown in a field
    pub fn text(&self, field: Field) -> &str {
        &self.state().calculator.field(field).text
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
