pub mod reducer;

use xrule_core::{Field, FieldAccess, FieldError, Fields, FormatOptions, Outcome};
use xrule_prefs::Theme;

/// Longest text a field accepts
pub const MAX_FIELD_LEN: usize = 24;

/// Text and presentation flags of one calculator field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub text: String,
    pub error: Option<FieldError>,
    pub just_computed: bool,
}

/// State of the four-field proportion form
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub fields: Fields<FieldState>,
    pub focused: Field,
    pub last_outcome: Option<Outcome>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            fields: Fields::default(),
            focused: Field::A,
            last_outcome: None,
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field]
    }

    /// Type a character into the focused field, clearing its error
    pub fn append_char(&mut self, c: char) {
        let field = &mut self.fields[self.focused];
        if field.text.chars().count() < MAX_FIELD_LEN {
            field.text.push(c);
        }
        field.error = None;
    }

    /// Delete the last character of the focused field, clearing its error
    pub fn delete_char(&mut self) {
        let field = &mut self.fields[self.focused];
        field.text.pop();
        field.error = None;
    }

    pub fn clear_focused(&mut self) {
        let field = &mut self.fields[self.focused];
        field.text.clear();
        field.error = None;
    }

    /// The field currently flagged as just computed
    pub fn just_computed(&self) -> Option<Field> {
        self.fields
            .iter()
            .find(|(_, state)| state.just_computed)
            .map(|(field, _)| field)
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|(_, state)| state.error.is_some())
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldAccess for CalculatorState {
    fn value(&self, field: Field) -> &str {
        &self.fields[field].text
    }

    fn set_value(&mut self, field: Field, value: String) {
        self.fields[field].text = value;
    }

    fn set_error(&mut self, field: Field, error: Option<FieldError>) {
        self.fields[field].error = error;
    }

    fn set_just_computed(&mut self, field: Field, just_computed: bool) {
        self.fields[field].just_computed = just_computed;
    }
}

/// Which picture the decorative cat shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconFace {
    #[default]
    Sleeping,
    Hello,
}

/// Decorative icon state. Never read by the calculator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconState {
    pub face: IconFace,
    pub hovered: bool,
    pub animating: bool,
    /// Bumped on every activation so only the latest revert timer applies
    pub generation: u64,
}

impl IconState {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if !self.animating {
            self.face = IconFace::Hello;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if !self.animating {
            self.face = IconFace::Sleeping;
        }
    }

    /// Start the wave; returns the generation the revert timer must carry
    pub fn activate(&mut self) -> u64 {
        self.animating = true;
        self.face = IconFace::Hello;
        self.generation += 1;
        self.generation
    }

    /// Finish the wave started by `generation`. Stale timers are ignored.
    pub fn revert(&mut self, generation: u64) -> bool {
        if !self.animating || generation != self.generation {
            return false;
        }
        self.animating = false;
        self.face = IconFace::Sleeping;
        true
    }
}

/// Top-level UI state
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculator: CalculatorState,
    pub theme: Theme,
    pub format: FormatOptions,
    pub icon: IconState,
    pub help_visible: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(theme: Theme, format: FormatOptions) -> Self {
        Self {
            calculator: CalculatorState::new(),
            theme,
            format,
            icon: IconState::default(),
            help_visible: false,
            should_quit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), FormatOptions::default())
    }
}
