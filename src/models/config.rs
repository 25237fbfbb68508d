use serde::{Deserialize, Serialize};

use crate::utils::path::get_settings_path;

/// Applikationsinställningar som inte hör till något bibliotek
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: 1100.0,
            window_height: 720.0,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        let path = get_settings_path();
        if let Ok(content) = std::fs::read_to_string(&path) {
            if let Ok(settings) = toml::from_str(&content) {
                return settings;
            }
            tracing::warn!("Kunde inte tolka {:?}, använder standardinställningar", path);
        }
        Self::default()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = get_settings_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_toml_roundtrip() {
        let settings = AppSettings {
            dark_mode: true,
            window_width: 1280.0,
            window_height: 800.0,
        };
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let loaded: AppSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.dark_mode, settings.dark_mode);
        assert_eq!(loaded.window_width, settings.window_width);
    }

    #[test]
    fn test_settings_backwards_compat() {
        // Gammal TOML utan fönsterstorlek — ska ge defaults
        let loaded: AppSettings = toml::from_str("dark_mode = true\n").unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.window_width, AppSettings::default().window_width);
    }
}
