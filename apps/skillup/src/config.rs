use anyhow::{bail, Context, Result};
use reqwest::Url;

/// Backend used when no override is configured outside production.
pub const LOCAL_DEV_API_URL: &str = "http://localhost:8000";

/// Application configuration loaded from environment variables.
/// Built once at startup and passed into the backend client.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub environment: String,
    pub http_timeout_secs: u64,
    pub rust_log: String,
}

/// Candidate base URLs, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct EndpointOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub development: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let environment =
            std::env::var("SKILLUP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let overrides = EndpointOverrides {
            primary: std::env::var("SKILLUP_API_BASE_URL").ok(),
            secondary: std::env::var("SKILLUP_BACKEND_API").ok(),
            development: std::env::var("SKILLUP_DEV_API_URL").ok(),
        };

        Ok(Config {
            api_base_url: resolve_base_url(&overrides, &environment)?,
            environment,
            http_timeout_secs: std::env::var("SKILLUP_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("SKILLUP_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Picks the first non-blank override, falling back to the local development
/// backend outside production. The result never ends with `/`.
pub fn resolve_base_url(overrides: &EndpointOverrides, environment: &str) -> Result<String> {
    let chosen = [
        overrides.primary.as_deref(),
        overrides.secondary.as_deref(),
        overrides.development.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|url| !url.is_empty());

    let url = match chosen {
        Some(url) => url,
        None if environment.eq_ignore_ascii_case("production") => {
            bail!("No API URL configured. Set SKILLUP_API_BASE_URL for production use")
        }
        None => LOCAL_DEV_API_URL,
    };

    let parsed = Url::parse(url).with_context(|| format!("Invalid API URL: {url}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("API URL must use http or https: {url}");
    }

    Ok(url.trim_end_matches('/').to_string())
}
