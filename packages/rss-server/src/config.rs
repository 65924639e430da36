use std::env;
use std::path::PathBuf;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Bind address (0.0.0.0 for LAN, 127.0.0.1 for localhost)
    pub bind_addr: String,
    /// Mean summary CSV path
    pub mean_csv: PathBuf,
    /// Variance summary CSV path
    pub variance_csv: PathBuf,
    /// CORS allowed origins (comma-separated in env var)
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // The dataset is required up front: the server must not start with
        // an incomplete dataset.
        let mean_csv = env::var("RSS_MEAN_CSV")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::MissingEnvVar("RSS_MEAN_CSV".to_string()))?;
        let variance_csv = env::var("RSS_VARIANCE_CSV")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::MissingEnvVar("RSS_VARIANCE_CSV".to_string()))?;

        Ok(Self {
            port: env::var("RSS_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            bind_addr: env::var("RSS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            mean_csv,
            variance_csv,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| {
                    vec![
                        "http://localhost:3000".to_string(),
                        "http://127.0.0.1:3000".to_string(),
                    ]
                }),
        })
    }

    /// Get the full bind address (addr:port)
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
