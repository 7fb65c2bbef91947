use anyhow::{Context, Result};
use reqwest::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Client configuration loaded from environment variables.
/// Every variable has a default, so a bare environment points at a local backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_base_url = std::env::var("API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Config {
            api_base_url: validate_base_url(&api_base_url)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Checks the base URL parses and strips any trailing slash so endpoint
/// paths can be appended verbatim.
fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).with_context(|| format!("API_BASE_URL '{raw}' is not a valid URL"))?;
    Ok(trimmed.to_string())
}
