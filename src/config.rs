// src/config.rs
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("STATUSINVEST_BASE_URL")
                .unwrap_or_else(|_| "https://statusinvest.com.br".to_string()),
            timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
        }
    }
}
