use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub extraction: ExtractionSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    #[serde(default = "default_extraction_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_extraction_model")]
    pub model: String,
    #[serde(default = "default_extraction_temperature")]
    pub temperature: f32,
    #[serde(default = "default_extraction_timeout")]
    pub timeout_secs: u64,
}

fn default_extraction_base_url() -> String { "https://api.openai.com/v1".to_string() }
fn default_extraction_model() -> String { "gpt-3.5-turbo".to_string() }
fn default_extraction_temperature() -> f32 { 0.2 }
fn default_extraction_timeout() -> u64 { 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_flow_cache_size")]
    pub flow_cache_size: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            flow_cache_size: default_flow_cache_size(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_flow_cache_size() -> u64 { 1000 }
fn default_cache_ttl() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    Pretty,
    /// Single-line human-readable output
    Compact,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RESUMATCH__)
    /// 5. `DATABASE_URL` / `SUPABASE_DB_URL` and `OPENAI_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RESUMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RESUMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_well_known_env(settings, |key| std::env::var(key).ok())?;

        settings.try_deserialize()
    }
}

/// Apply conventional, unprefixed environment variables on top of `settings`
///
/// `DATABASE_URL` wins over `SUPABASE_DB_URL`.
fn apply_well_known_env<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = lookup("DATABASE_URL").or_else(|| lookup("SUPABASE_DB_URL")) {
        builder = builder.set_override("database.url", url)?;
    }
    if let Some(api_key) = lookup("OPENAI_API_KEY") {
        builder = builder.set_override("extraction.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::collections::HashMap;

    const MINIMAL: &str = r#"
        [server]
        port = 9000

        [database]
        url = "postgres://file/db"

        [extraction]
        api_key = "file-key"
    "#;

    fn minimal_config() -> Config {
        Config::builder()
            .add_source(File::from_str(MINIMAL, FileFormat::Toml))
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let settings: Settings = minimal_config().try_deserialize().unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.extraction.model, "gpt-3.5-turbo");
        assert_eq!(settings.extraction.temperature, 0.2);
        assert_eq!(settings.cache.flow_cache_size, 1000);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_well_known_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SUPABASE_DB_URL", "postgres://supabase/db"),
            ("OPENAI_API_KEY", "env-key"),
        ]
        .into_iter()
        .collect();

        let settings: Settings =
            apply_well_known_env(minimal_config(), |k| env.get(k).map(|v| v.to_string()))
                .unwrap()
                .try_deserialize()
                .unwrap();

        assert_eq!(settings.database.url, "postgres://supabase/db");
        assert_eq!(settings.extraction.api_key, "env-key");
    }

    #[test]
    fn test_database_url_preferred_over_supabase() {
        let env: HashMap<&str, &str> = [
            ("DATABASE_URL", "postgres://primary/db"),
            ("SUPABASE_DB_URL", "postgres://supabase/db"),
        ]
        .into_iter()
        .collect();

        let settings: Settings =
            apply_well_known_env(minimal_config(), |k| env.get(k).map(|v| v.to_string()))
                .unwrap()
                .try_deserialize()
                .unwrap();

        assert_eq!(settings.database.url, "postgres://primary/db");
        assert_eq!(settings.extraction.api_key, "file-key");
    }

    #[test]
    fn test_log_format_parsing() {
        let config = Config::builder()
            .add_source(File::from_str(MINIMAL, FileFormat::Toml))
            .set_override("logging.format", "pretty")
            .unwrap()
            .build()
            .unwrap();
        let settings: Settings = config.try_deserialize().unwrap();
        assert_eq!(settings.logging.format, LogFormat::Pretty);

        let config = Config::builder()
            .add_source(File::from_str(MINIMAL, FileFormat::Toml))
            .set_override("logging.format", "xml")
            .unwrap()
            .build()
            .unwrap();
        assert!(config.try_deserialize::<Settings>().is_err());
    }
}
