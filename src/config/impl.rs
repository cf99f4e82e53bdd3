use std::env;
use std::fs;
use std::path::Path;

use tracing::{debug, error, warn};

use super::AppConfig;

impl AppConfig {
    /// Load configuration from TOML file with environment variable override.
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    fn load_from_file() -> Self {
        let config_paths = ["snaplink.toml", "config.toml", "config/snaplink.toml"];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    fn override_with_env(&mut self) {
        // Server config
        if let Ok(host) = env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            } else {
                error!("Invalid PORT: {}", port);
            }
        }

        // Database config
        if let Ok(backend) = env::var("DATABASE_BACKEND") {
            self.database.backend = backend;
        }
        if let Ok(database_url) = env::var("DATABASE_URL") {
            self.database.database_url = database_url;
        }

        // Route config. The env names match the original deployment:
        // SHORTEN_URL and REDIRECT_URL_PARAMS are bare path segments.
        if let Ok(shorten) = env::var("SHORTEN_URL") {
            self.routes.shorten = shorten.trim_matches('/').to_string();
        }
        if let Ok(redirect) = env::var("REDIRECT_URL_PARAMS") {
            self.routes.redirect = redirect.trim_matches('/').to_string();
        }

        // API config
        if let Ok(password) = env::var("API_PASSWORD") {
            self.api.password = password;
        }

        // Logging config
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(file) = env::var("LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}
