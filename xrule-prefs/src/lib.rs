// Persisted display preferences and application settings
mod color_scheme;
mod error;
mod models;
mod preference_storage;
mod settings;

pub use color_scheme::{ColorSchemeSignal, EnvColorScheme, FixedColorScheme};
pub use error::PrefsError;
pub use models::{StoredPreferences, Theme};
pub use preference_storage::{MemoryStore, PreferenceFile, PreferenceStore};
pub use settings::Settings;

/// Pick the theme to start with.
///
/// A valid stored preference wins; a missing, unreadable or unrecognised one
/// falls back to the environment's color-scheme signal.
pub fn initial_theme<P, S>(store: &P, signal: &S) -> Theme
where
    P: PreferenceStore + ?Sized,
    S: ColorSchemeSignal + ?Sized,
{
    let from_signal = || {
        if signal.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    };

    match store.load_theme() {
        Ok(Some(stored)) => match stored.parse::<Theme>() {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Ignoring stored theme: {}", e);
                from_signal()
            }
        },
        Ok(None) => from_signal(),
        Err(e) => {
            tracing::warn!("Failed to read preferences: {}", e);
            from_signal()
        }
    }
}
