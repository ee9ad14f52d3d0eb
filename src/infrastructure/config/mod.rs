use crate::infrastructure::repositories::minimax_tts_repository::{DEFAULT_TIMEOUT, MINIMAX_API_URL};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // MiniMax API
    pub minimax_api_url: String,
    pub minimax_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            minimax_api_url: env::var("MINIMAX_API_URL")
                .unwrap_or_else(|_| MINIMAX_API_URL.to_string()),
            minimax_timeout_secs: env::var("MINIMAX_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .unwrap_or(Ok(DEFAULT_TIMEOUT.as_secs()))?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn minimax_timeout(&self) -> Duration {
        Duration::from_secs(self.minimax_timeout_secs)
    }
}
