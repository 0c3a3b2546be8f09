use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_base_url: String,
    pub log_dir: String,

    // Rate limiting
    pub rate_per_min: u32,

    // View-state records expire after this much inactivity
    pub session_idle: Duration,
}

impl Config {
    /// Reads the process environment; call `dotenvy::dotenv()` first.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8080"),
            api_base_url: var("API_BASE_URL", "http://localhost:5000"),
            log_dir: var("LOG_DIR", "logs"),
            rate_per_min: var("RATE_PER_MIN", "600")
                .parse()
                .context("RATE_PER_MIN must be a whole number")?,
            session_idle: Duration::from_secs(
                var("SESSION_IDLE_SECS", "1800")
                    .parse()
                    .context("SESSION_IDLE_SECS must be a number of seconds")?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.log_dir, "logs");
        assert_eq!(config.rate_per_min, 600);
        assert_eq!(config.session_idle, Duration::from_secs(1800));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("API_BASE_URL", "https://payroll.example.com/v1/"),
            ("RATE_PER_MIN", "30"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://payroll.example.com/v1/");
        assert_eq!(config.rate_per_min, 30);
    }

    #[test]
    fn malformed_numbers_fail_startup() {
        let err = Config::from_lookup(lookup(&[("SESSION_IDLE_SECS", "half an hour")])).unwrap_err();
        assert!(err.to_string().contains("SESSION_IDLE_SECS"));
    }
}
