//! Configuration System
//!
//! The remote endpoint constants are always available. On native targets the
//! client settings are loaded from a TOML file with environment variable
//! overrides.

/// Default remote API endpoint
pub const DEFAULT_API_URL: &str = "https://realtime-chat-app-api-tbaf.onrender.com";

/// Key under which the access token is persisted
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

#[cfg(feature = "native")]
pub use native::*;

#[cfg(feature = "native")]
mod native {
    use serde::Deserialize;
    use std::path::{Path, PathBuf};

    use super::DEFAULT_API_URL;

    /// Main configuration structure
    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct Config {
        #[serde(default)]
        pub api: ApiConfig,

        #[serde(default)]
        pub storage: StorageConfig,

        #[serde(default)]
        pub logging: LoggingConfig,
    }

    /// Remote API configuration
    #[derive(Debug, Clone, Deserialize)]
    pub struct ApiConfig {
        #[serde(default = "default_base_url")]
        pub base_url: String,

        #[serde(default = "default_request_timeout")]
        pub request_timeout_secs: u64,
    }

    fn default_base_url() -> String {
        DEFAULT_API_URL.to_string()
    }

    fn default_request_timeout() -> u64 {
        30
    }

    impl Default for ApiConfig {
        fn default() -> Self {
            Self {
                base_url: default_base_url(),
                request_timeout_secs: default_request_timeout(),
            }
        }
    }

    /// Local persistence configuration
    #[derive(Debug, Clone, Deserialize)]
    pub struct StorageConfig {
        #[serde(default = "default_token_file")]
        pub token_file: String,
    }

    fn default_token_file() -> String {
        dirs::data_local_dir()
            .map(|p| p.join("chatterbox").join("access_token").to_string_lossy().to_string())
            .unwrap_or_else(|| "./.chatterbox_token".to_string())
    }

    impl Default for StorageConfig {
        fn default() -> Self {
            Self {
                token_file: default_token_file(),
            }
        }
    }

    /// Logging configuration
    #[derive(Debug, Clone, Deserialize)]
    pub struct LoggingConfig {
        #[serde(default = "default_log_level")]
        pub level: String,

        #[serde(default = "default_log_format")]
        pub format: String,
    }

    fn default_log_level() -> String {
        "info".to_string()
    }

    fn default_log_format() -> String {
        "pretty".to_string()
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: default_log_level(),
                format: default_log_format(),
            }
        }
    }

    impl Config {
        /// Load configuration from a file
        pub fn load(path: &Path) -> Result<Self, ConfigError> {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

            Self::parse(&content).map_err(|error| ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            })
        }

        /// Parse configuration from TOML text
        pub fn parse(content: &str) -> Result<Self, String> {
            toml::from_str(content).map_err(|e| e.to_string())
        }

        /// Load configuration from environment variables only
        pub fn from_env() -> Self {
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }

        /// Load configuration with environment variable overrides
        pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
            let mut config = Self::load(path)?;
            config.apply_env_overrides();
            Ok(config)
        }

        /// Load from default locations or environment
        pub fn load_default() -> Self {
            let config_paths = [
                dirs::config_dir().map(|p| p.join("chatterbox").join("config.toml")),
                Some(PathBuf::from("./config.toml")),
            ];

            for path_opt in config_paths.iter().flatten() {
                if path_opt.exists() {
                    match Self::load_with_env(path_opt) {
                        Ok(config) => {
                            tracing::info!("Loaded config from {:?}", path_opt);
                            return config;
                        }
                        Err(e) => {
                            tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                        }
                    }
                }
            }

            tracing::debug!("Using default config with environment overrides");
            Self::from_env()
        }

        /// Apply environment variable overrides to an existing config
        fn apply_env_overrides(&mut self) {
            if let Ok(url) = std::env::var("CHATTERBOX_API_URL") {
                self.api.base_url = url;
            }
            if let Ok(path) = std::env::var("CHATTERBOX_TOKEN_FILE") {
                self.storage.token_file = path;
            }
            if let Ok(level) = std::env::var("CHATTERBOX_LOG_LEVEL") {
                self.logging.level = level;
            }
            if let Ok(format) = std::env::var("CHATTERBOX_LOG_FORMAT") {
                self.logging.format = format;
            }
        }
    }

    /// Configuration errors
    #[derive(Debug, thiserror::Error)]
    pub enum ConfigError {
        #[error("Failed to read config file {path:?}: {error}")]
        Io { path: PathBuf, error: String },

        #[error("Failed to parse config file {path:?}: {error}")]
        Parse { path: PathBuf, error: String },
    }

    /// Generate a default config file content
    pub fn generate_default_config() -> String {
        format!(
            r#"# Chatterbox Configuration
#
# Environment variables override these settings:
# - CHATTERBOX_API_URL
# - CHATTERBOX_TOKEN_FILE
# - CHATTERBOX_LOG_LEVEL
# - CHATTERBOX_LOG_FORMAT

[api]
# Remote API endpoint
base_url = "{DEFAULT_API_URL}"

# Request timeout in seconds
request_timeout_secs = 30

[storage]
# Where the access token is kept between runs
# token_file = "~/.local/share/chatterbox/access_token"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
        )
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.storage.token_file.ends_with("access_token")
            || config.storage.token_file.ends_with(".chatterbox_token"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(
            r#"
[api]
base_url = "http://localhost:3000"

[logging]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(std::path::Path::new("/nonexistent/chatterbox.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://from-file"

[storage]
token_file = "/from/file/token"

[logging]
level = "warn"
format = "pretty"
"#,
        )
        .unwrap();

        let vars = [
            ("CHATTERBOX_API_URL", "http://from-env"),
            ("CHATTERBOX_TOKEN_FILE", "/from/env/token"),
            ("CHATTERBOX_LOG_LEVEL", "debug"),
            ("CHATTERBOX_LOG_FORMAT", "json"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }

        let loaded = Config::load_with_env(&path);
        let plain = Config::load(&path);

        for (key, _) in vars {
            std::env::remove_var(key);
        }

        let config = loaded.unwrap();
        assert_eq!(config.api.base_url, "http://from-env");
        assert_eq!(config.storage.token_file, "/from/env/token");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.api.request_timeout_secs, 30);

        // Without the env step the file values stand
        let plain = plain.unwrap();
        assert_eq!(plain.api.base_url, "http://from-file");
        assert_eq!(plain.logging.level, "warn");
    }
}
