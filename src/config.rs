use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "receipt_desk_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin.
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_toast_duration_ms() -> u32 {
    2800
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base: String::new(),
            toast_duration_ms: default_toast_duration_ms(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

pub fn load_config() -> Result<AppConfig, serde_json::Error> {
    let raw = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    match raw {
        Some(raw) => AppConfig::from_json(&raw),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_base":"http://127.0.0.1:8000"}"#).unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:8000");
        assert_eq!(config.toast_duration_ms, 2800);
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn level_parsing() {
        let config = AppConfig {
            log_level: "debug".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.level(), log::Level::Debug);
        let bad = AppConfig {
            log_level: "chatty".into(),
            ..AppConfig::default()
        };
        assert_eq!(bad.level(), log::Level::Info);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
