//! Connection parameters for the probed database.

use std::fmt;
use std::str::FromStr;

use sqlx::mysql::MySqlConnectOptions;

use crate::{ProbeError, Result};

/// Where and how to connect.
///
/// `url`, when present, wins over the discrete fields.
#[derive(Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseSettings {
    /// Builds driver connect options from these settings.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions> {
        if let Some(url) = &self.url {
            return MySqlConnectOptions::from_str(url).map_err(ProbeError::InvalidUrl);
        }

        Ok(MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name))
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 3306,
            user: "showcase_user".to_string(),
            password: String::new(),
            name: "showcase_db".to_string(),
        }
    }
}

// Hand-written so the password never ends up in logs.
impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}
