// Settings module
// Runtime configuration shared by the server and the desktop client

use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_DATABASE_FILE: &str = "timeline.db";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_address: String,
    pub database_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            database_path: DEFAULT_DATABASE_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub api_base_url: String,
    /// Quiet period before an edited row is written back.
    pub debounce_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Contents of `config.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub client: ClientSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.server.bind_address.trim().is_empty() {
            return Err("Server bind address cannot be empty".to_string());
        }

        if self.server.database_path.trim().is_empty() {
            return Err("Database path cannot be empty".to_string());
        }

        let url = self.client.api_base_url.trim();
        if url.is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err("API base URL must start with http:// or https://".to_string());
        }

        if self.client.debounce_ms == 0 {
            return Err("Debounce window must be at least 1 ms".to_string());
        }

        if self.client.request_timeout_secs == 0 {
            return Err("Request timeout must be at least 1 second".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.client.debounce_ms, 300);
        assert_eq!(settings.server.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let mut settings = Settings::default();
        settings.client.debounce_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_url_scheme_required() {
        let mut settings = Settings::default();
        settings.client.api_base_url = "localhost:3000".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [client]
            api_base_url = "http://timeline.internal:8080"
            "#,
        )
        .unwrap();

        assert_eq!(settings.client.api_base_url, "http://timeline.internal:8080");
        assert_eq!(settings.client.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(settings.server, ServerSettings::default());
    }
}
