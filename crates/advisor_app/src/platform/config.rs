//! Environment-driven configuration for the advisor shell.

use std::env;

use advisor_api::ApiSettings;
use advisor_logging::LogDestination;
use secrecy::SecretString;
use thiserror::Error;

const BASE_URL_VAR: &str = "ADVISOR_BASE_URL";
const API_KEY_VAR: &str = "ADVISOR_API_KEY";
const LOG_VAR: &str = "ADVISOR_LOG";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    MissingVar(&'static str),
    #[error("invalid value `{value}` for `{var}` (expected terminal, file, or both)")]
    InvalidLogDestination { var: &'static str, value: String },
}

pub struct AppConfig {
    pub api: ApiSettings,
    pub log_destination: LogDestination,
}

pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let api_key = env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

    let log_destination = match env::var(LOG_VAR) {
        Ok(value) => match parse_log_destination(&value) {
            Some(destination) => destination,
            None => {
                return Err(ConfigError::InvalidLogDestination {
                    var: LOG_VAR,
                    value,
                })
            }
        },
        Err(_) => LogDestination::Terminal,
    };

    Ok(AppConfig {
        api: ApiSettings::new(base_url, SecretString::from(api_key)),
        log_destination,
    })
}

fn parse_log_destination(value: &str) -> Option<LogDestination> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("terminal") {
        Some(LogDestination::Terminal)
    } else if value.eq_ignore_ascii_case("file") {
        Some(LogDestination::File)
    } else if value.eq_ignore_ascii_case("both") {
        Some(LogDestination::Both)
    } else {
        None
    }
}
