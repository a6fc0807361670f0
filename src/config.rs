use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CorsConfig {
    /// Allowed origin; absent or "*" allows any origin.
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_baseurl")]
    pub baseurl: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            baseurl: default_baseurl(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_port() -> String {
    "3002".to_string()
}

fn default_baseurl() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}

/// Values picked up from the process environment at startup. They win over
/// whatever the config file says, so the server can run without a file at all.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub tmdb_key: Option<String>,
    pub cors_origin: Option<String>,
    pub port: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            tmdb_key: std::env::var("TMDB_KEY").ok(),
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
            port: std::env::var("PORT").ok(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    pub fn apply_env(&mut self, env: EnvOverrides) {
        if let Some(key) = env.tmdb_key {
            self.tmdb.api_key = key;
        }
        if let Some(origin) = env.cors_origin {
            self.cors.origin = Some(origin);
        }
        if let Some(port) = env.port {
            self.listen.port = port;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
