use std::path::PathBuf;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{PeticaoError, Result};
use crate::models::DamageInputs;
use crate::money::check_amount;

/// Overrides the settings directory (tests, multiple offices).
pub const CONFIG_DIR_ENV: &str = "PETICAO_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_office_name")]
    pub office_name: String,
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default = "default_state")]
    pub default_state: String,
    #[serde(default = "default_moral_damage")]
    pub moral_damage: Decimal,
    #[serde(default = "default_wasted_time_damage")]
    pub wasted_time_damage: Decimal,
}

fn default_office_name() -> String {
    "SENA ADVOCACIA".to_string()
}

fn default_city() -> String {
    "Manaus".to_string()
}

fn default_state() -> String {
    "AM".to_string()
}

fn default_moral_damage() -> Decimal {
    dec!(20000)
}

fn default_wasted_time_damage() -> Decimal {
    dec!(2000)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            office_name: default_office_name(),
            default_city: default_city(),
            default_state: default_state(),
            moral_damage: default_moral_damage(),
            wasted_time_damage: default_wasted_time_damage(),
        }
    }
}

impl Settings {
    pub fn damages(&self) -> DamageInputs {
        DamageInputs {
            moral_damage: self.moral_damage,
            wasted_time_damage: self.wasted_time_damage,
        }
    }

    /// Default damages obey the same bounds as any other input amount.
    pub fn validate(&self) -> Result<()> {
        check_amount("moral_damage", self.moral_damage)?;
        check_amount("wasted_time_damage", self.wasted_time_damage)?;
        Ok(())
    }
}

pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("peticao")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        return Settings::default();
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("cannot read {}: {e}; using defaults", path.display());
            return Settings::default();
        }
    };
    parse_settings(&content).unwrap_or_else(|e| {
        tracing::warn!("ignoring {}: {e}", path.display());
        Settings::default()
    })
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings =
        serde_json::from_str(content).map_err(|e| PeticaoError::Settings(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    settings.validate()?;
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| PeticaoError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}
