use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Reads `.env` if present, then resolves the configuration from the process
/// environment.
///
/// # Errors
///
/// Returns `ConfigError` if `TECHSTORE_BACKEND_URL` is unset or any value fails
/// to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Resolves the configuration from the process environment only; `.env` is
/// not read.
///
/// # Errors
///
/// Same as [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Resolves every `TECHSTORE_*` variable through `lookup`, applying defaults.
/// Tests pass a `HashMap`-backed lookup instead of mutating the environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let value_or = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let backend_url = lookup("TECHSTORE_BACKEND_URL")
        .map_err(|_| ConfigError::MissingEnvVar("TECHSTORE_BACKEND_URL".to_string()))?;
    if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "TECHSTORE_BACKEND_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{backend_url}'"),
        });
    }

    let env = parse_environment(&value_or("TECHSTORE_ENV", "development"))?;
    let log_level = value_or("TECHSTORE_LOG_LEVEL", "info");
    let session_path = PathBuf::from(value_or(
        "TECHSTORE_SESSION_PATH",
        "./.techstore/storage.json",
    ));
    let request_timeout_secs = parse_number(
        "TECHSTORE_REQUEST_TIMEOUT_SECS",
        &value_or("TECHSTORE_REQUEST_TIMEOUT_SECS", "0"),
    )?;
    let user_agent = value_or("TECHSTORE_USER_AGENT", "techstore/0.1 (storefront)");

    let page_limit: u32 =
        parse_number("TECHSTORE_PAGE_LIMIT", &value_or("TECHSTORE_PAGE_LIMIT", "50"))?;
    if page_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TECHSTORE_PAGE_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        backend_url,
        env,
        log_level,
        session_path,
        request_timeout_secs,
        user_agent,
        page_limit,
    })
}

fn parse_number<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

/// Accepts the lowercase environment names only.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TECHSTORE_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
