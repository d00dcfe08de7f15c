use std::env;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Process-level settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
    pub screening_config: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidVar { name: "PORT", value })?,
            Err(_) => 8081,
        };

        let host = env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let frontend_dir = env::var("FRONTEND_DIR").unwrap_or_else(|_| {
            if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
                format!("{}/../frontend/dist", manifest_dir)
            } else {
                "/usr/src/app/frontend/dist".to_string()
            }
        });

        let screening_config = env::var("SCREENING_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_screening_config());

        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|value| parse_origins(&value))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            frontend_dir,
            screening_config,
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_screening_config() -> PathBuf {
    match env::var("CARGO_MANIFEST_DIR") {
        Ok(manifest_dir) => PathBuf::from(manifest_dir).join("../config/screening.yaml"),
        Err(_) => PathBuf::from("config/screening.yaml"),
    }
}

/// Comma-separated origins; empty entries are dropped. An empty list means
/// any origin is accepted.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" http://localhost:8080, ,https://screening.example "),
            vec!["http://localhost:8080", "https://screening.example"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 9000,
            frontend_dir: "dist".into(),
            screening_config: PathBuf::from("screening.yaml"),
            allowed_origins: Vec::new(),
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }
}
