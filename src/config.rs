use std::env;
use std::time::Duration;

use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "KRDICT_API_URL not set. Point it (or --api-url) at a JSON gateway for the dictionary; \
         the krdict Open API itself answers in XML and cannot be queried directly"
    )]
    ApiUrlNotSet,

    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidApiUrl { var: &'static str, value: String },
}

#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(Self(key.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Client configuration, built once at startup and handed to the client.
///
/// The client speaks JSON to a gateway in front of the dictionary service
/// (`search`, `view` and the `scraper/*` endpoints). The public krdict Open
/// API answers in XML and has no scraper endpoints, so there is no default
/// base URL: one must be configured.
///
/// Environment variables (a `.env` file is loaded first when present):
/// - `KRDICT_KEY`: API key (required for any request)
/// - `KRDICT_API_URL`: base URL of the JSON gateway (required)
/// - `KRDICT_TIMEOUT_SECS`: per-request timeout (optional, default 30)
///
/// `--api-url` and `--timeout` take precedence over the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<ApiKey>,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env(
        api_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => debug!(%e, "ignoring unreadable .env"),
        }
        Self::from_vars(
            env::var("KRDICT_KEY").ok(),
            api_url.or_else(|| env::var("KRDICT_API_URL").ok()),
            timeout_secs
                .map(|secs| secs.to_string())
                .or_else(|| env::var("KRDICT_TIMEOUT_SECS").ok()),
        )
    }

    fn from_vars(
        key: Option<String>,
        api_url: Option<String>,
        timeout: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = key.as_deref().and_then(ApiKey::new);

        let api_url = api_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::ApiUrlNotSet)
            .and_then(validate_api_url)?;

        let timeout = match timeout.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
            Some(t) => parse_timeout(&t)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            api_url,
            timeout,
        })
    }
}

fn validate_api_url(value: String) -> Result<String, ConfigError> {
    match url::Url::parse(&value) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => {
            Ok(value.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidApiUrl {
            var: "KRDICT_API_URL",
            value,
        }),
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var: "KRDICT_TIMEOUT_SECS",
            value: value.to_string(),
        }),
    }
}
