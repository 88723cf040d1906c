use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for movie-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Token signing configuration. The secret must be at least 32 bytes.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

/// Password storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
    /// Accept stored values without a bcrypt prefix as plaintext passwords
    pub allow_legacy_plaintext: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: 10,
            allow_legacy_plaintext: true,
        }
    }
}

/// Cross-origin policy for browser clients.
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// `CORS__ALLOWED_ORIGINS` takes a comma separated list.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        configuration.try_deserialize()
    }
}
