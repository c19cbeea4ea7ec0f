use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use xrule_core::{FormatOptions, Rounding, Separator};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Separator for a solved value when none of the operands used a comma
    #[serde(default)]
    pub decimal_separator: Separator,
    #[serde(default)]
    pub rounding: Rounding,
    /// How long the icon keeps waving after a click
    #[serde(default = "default_icon_revert_ms")]
    pub icon_revert_ms: u64,
}

fn default_icon_revert_ms() -> u64 {
    2000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decimal_separator: Separator::default(),
            rounding: Rounding::default(),
            icon_revert_ms: default_icon_revert_ms(),
        }
    }
}

impl Settings {
    /// Load from `$XRULE_CONFIG` (or `<config dir>/xrule/config.toml`) and `XRULE__*` variables
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = std::env::var("XRULE_CONFIG").unwrap_or_else(|_| {
            dirs::config_dir()
                .map(|dir| dir.join("xrule").join("config.toml"))
                .unwrap_or_else(|| "config.toml".into())
                .to_string_lossy()
                .into_owned()
        });

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("XRULE").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.icon_revert_ms == 0 {
            return Err("icon_revert_ms must be greater than zero".to_string());
        }
        Ok(())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            separator: self.decimal_separator,
            rounding: self.rounding,
        }
    }

    pub fn icon_revert_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.icon_revert_ms)
    }
}
