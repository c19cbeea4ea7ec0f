/// Source of the host's light/dark preference.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Reads the `COLORFGBG` convention (`"fg;bg"`) set by many terminal emulators.
///
/// Background palette indices 0-6 and 8 are dark colors. Anything else, or no
/// variable at all, means light.
#[derive(Debug, Clone, Default)]
pub struct EnvColorScheme {
    colorfgbg: Option<String>,
}

impl EnvColorScheme {
    pub fn from_env() -> Self {
        Self {
            colorfgbg: std::env::var("COLORFGBG").ok(),
        }
    }

    pub fn from_value(colorfgbg: impl Into<String>) -> Self {
        Self {
            colorfgbg: Some(colorfgbg.into()),
        }
    }
}

impl ColorSchemeSignal for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        self.colorfgbg
            .as_deref()
            .and_then(|value| value.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok())
            .is_some_and(|bg| matches!(bg, 0..=6 | 8))
    }
}

/// Signal with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeSignal for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
