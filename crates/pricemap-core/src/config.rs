use url::Url;

use crate::app_config::{AppConfig, Environment};
use crate::maps::DEFAULT_MAP_SEARCH_BASE;
use crate::ConfigError;

/// Feed published alongside the January 2025 milk price survey.
pub const DEFAULT_FEED_URL: &str = "https://raw.githubusercontent.com/madhatter349/Target-Milk-Prices---Jan-9-2025/refs/heads/main/all_store_details_with_products.json";

pub const DEFAULT_USER_AGENT: &str = "pricemap/0.1 (price-viewer)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    load_app_config_with_feed_url(None)
}

/// Like [`load_app_config`], but a `feed_url` given on the command line
/// replaces `PRICEMAP_FEED_URL`, which is then neither read nor validated.
///
/// # Errors
///
/// Returns `ConfigError` if a value that is used is invalid.
pub fn load_app_config_with_feed_url(feed_url: Option<&str>) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key), feed_url)
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key), None)
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(
    lookup: F,
    feed_url_override: Option<&str>,
) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("PRICEMAP_ENV", "development"));
    let feed_url = match feed_url_override {
        Some(url) => checked_http_url("--feed-url", url)?,
        None => checked_http_url(
            "PRICEMAP_FEED_URL",
            &or_default("PRICEMAP_FEED_URL", DEFAULT_FEED_URL),
        )?,
    };
    let map_search_base = checked_http_url(
        "PRICEMAP_MAP_SEARCH_BASE",
        &or_default("PRICEMAP_MAP_SEARCH_BASE", DEFAULT_MAP_SEARCH_BASE),
    )?;
    let user_agent = or_default("PRICEMAP_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("PRICEMAP_LOG_LEVEL", "info");

    Ok(AppConfig {
        env,
        feed_url,
        map_search_base,
        user_agent,
        log_level,
    })
}

fn checked_http_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    validate_http_url(raw).map_err(|reason| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    })?;
    Ok(raw.to_string())
}

/// Checks that `raw` parses as an absolute `http(s)` URL with a host.
///
/// # Errors
///
/// Returns a human-readable reason when the value is rejected.
pub fn validate_http_url(raw: &str) -> Result<(), String> {
    if raw.chars().any(char::is_whitespace) {
        return Err(format!("\"{raw}\" contains whitespace"));
    }
    let url = Url::parse(raw).map_err(|e| format!("\"{raw}\" is not a valid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "\"{raw}\" must use http or https, not \"{}\"",
            url.scheme()
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("\"{raw}\" has no host"));
    }
    Ok(())
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
