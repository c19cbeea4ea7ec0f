use xrule_core::Field;

/// Commands to execute (user actions → state changes and effects)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Field navigation
    FocusNextField,
    FocusPreviousField,
    FocusField(Field),

    // Editing
    AppendChar(char),
    DeleteChar,
    ClearField,

    // Calculator
    Calculate,
    Reset,

    // Appearance
    ToggleTheme,
    ToggleHelp,

    // Decorative icon
    IconPointerEnter,
    IconPointerLeave,
    IconActivate,

    // System
    Quit,
}

/// Events from background tasks
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The revert timer for icon activation number `generation` fired
    IconRevert { generation: u64 },
}
