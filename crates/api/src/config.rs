//! Application configuration loaded from environment variables.

use std::time::Duration;

use db_probe::DatabaseSettings;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `pretty` or `json` (default: `pretty`)
/// - `DATABASE_URL` — full connection URL, overrides the `DB_*` variables
/// - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
/// - `CPU_SAMPLE_INTERVAL_MS` — CPU measurement window (default: `1000`)
/// - `INDEX_TEMPLATE` — path to an HTML file served at `/` instead of the built-in page
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub database: DatabaseSettings,
    pub cpu_sample_interval: Duration,
    pub index_template: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let db_defaults = defaults.database;

        let database = DatabaseSettings {
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            host: lookup("DB_HOST").unwrap_or(db_defaults.host),
            port: lookup("DB_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(db_defaults.port),
            user: lookup("DB_USER").unwrap_or(db_defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(db_defaults.password),
            name: lookup("DB_NAME").unwrap_or(db_defaults.name),
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.log_format),
            database,
            cpu_sample_interval: lookup("CPU_SAMPLE_INTERVAL_MS")
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.cpu_sample_interval),
            index_template: lookup("INDEX_TEMPLATE").filter(|path| !path.is_empty()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            database: DatabaseSettings::default(),
            cpu_sample_interval: Duration::from_secs(1),
            index_template: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.cpu_sample_interval, Duration::from_secs(1));
        assert!(config.index_template.is_none());
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_addr_default() {
        let config = Config::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.addr(), "0.0.0.0:8000");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.name, "showcase_db");
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("PORT", "9100"),
            ("LOG_FORMAT", "JSON"),
            ("DB_HOST", "db"),
            ("DB_PORT", "3307"),
            ("DB_USER", "probe"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "app"),
            ("CPU_SAMPLE_INTERVAL_MS", "250"),
            ("INDEX_TEMPLATE", "/srv/index.html"),
        ]);

        assert_eq!(config.port, 9100);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.user, "probe");
        assert_eq!(config.database.password, "s3cret");
        assert_eq!(config.database.name, "app");
        assert_eq!(config.cpu_sample_interval, Duration::from_millis(250));
        assert_eq!(config.index_template.as_deref(), Some("/srv/index.html"));
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = from_pairs(&[("PORT", "http"), ("DB_PORT", "-1")]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.database.port, 3306);
    }

    #[test]
    fn test_debug_hides_password() {
        let config = from_pairs(&[("DB_PASSWORD", "s3cret")]);
        assert!(!format!("{config:?}").contains("s3cret"));
    }
}
