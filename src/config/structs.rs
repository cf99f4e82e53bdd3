use serde::{Deserialize, Serialize};

/// Application configuration, constructed once at startup and injected
/// into handlers via `web::Data`. Nothing reads the environment after
/// `AppConfig::load` returns.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub routes: RouteConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: String,
    pub database_url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            database_url: "sqlite://snaplink.db?mode=rwc".to_string(),
        }
    }
}

/// Path segments for the two dynamic endpoints. Stored without leading
/// slash, e.g. `shorten` mounts as `POST /shorten`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub shorten: String,
    pub redirect: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            shorten: "shorten".to_string(),
            redirect: "redirect".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Shared secret required on every shorten request.
    pub password: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            password: "default_password".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `text` or `json`
    pub format: String,
    /// Log file path; empty or absent means stdout.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
        }
    }
}
