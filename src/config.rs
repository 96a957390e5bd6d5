use anyhow::{anyhow, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub seed_demo_data: bool,
    pub log_filter: String,
}

/// Tracing filter used when `RUST_LOG` is unset or blank.
pub const DEFAULT_LOG_FILTER: &str = "project_tracker=debug,tower_http=debug";

impl Config {
    pub fn from_env() -> Result<Self> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "4000".to_string());
        let port_str = if port_str.trim().is_empty() {
            "4000".to_string()
        } else {
            port_str
        };
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid PORT"))?;

        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(value) => parse_flag(&value).ok_or_else(|| anyhow!("Invalid SEED_DEMO_DATA"))?,
            Err(_) => true,
        };

        let log_filter = env::var("RUST_LOG")
            .ok()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            http_port,
            seed_demo_data,
            log_filter,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
