// ABOUTME: Configuration - credentials and AgentQL request settings.
// ABOUTME: Everything can be loaded from the process environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable holding the AgentQL API key.
pub const AGENTQL_API_KEY_ENV: &str = "AGENTQL_API_KEY";

/// Environment variable overriding the AgentQL API base URL.
pub const AGENTQL_API_BASE_ENV: &str = "AGENTQL_API_BASE";

/// Default AgentQL API base URL.
pub const DEFAULT_AGENTQL_API_BASE: &str = "https://api.agentql.com";

/// Default request timeout for AgentQL calls. Extraction can take minutes.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(900);

/// Upper bound for `wait_for`, in seconds.
pub const MAX_WAIT_FOR_SECS: u64 = 10;

const DEFAULT_REQUEST_ORIGIN: &str = "agentql-tools";

/// Read an env var, treating empty values as unset.
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// API keys needed for live agent runs.
#[derive(Clone, Default)]
pub struct Credentials {
    pub openai_api_key: Option<String>,
    pub agentql_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("agentql_api_key", &self.agentql_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Both keys, present.
#[derive(Clone)]
pub struct LiveCredentials {
    pub openai_api_key: String,
    pub agentql_api_key: String,
}

impl Credentials {
    /// Load credentials from `OPENAI_API_KEY` and `AGENTQL_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env_var(OPENAI_API_KEY_ENV),
            agentql_api_key: env_var(AGENTQL_API_KEY_ENV),
        }
    }

    /// Returns both keys if, and only if, both are set.
    pub fn live(&self) -> Option<LiveCredentials> {
        Some(LiveCredentials {
            openai_api_key: self.openai_api_key.clone()?,
            agentql_api_key: self.agentql_api_key.clone()?,
        })
    }

    /// Names of the variables that are missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openai_api_key.is_none() {
            missing.push(OPENAI_API_KEY_ENV);
        }
        if self.agentql_api_key.is_none() {
            missing.push(AGENTQL_API_KEY_ENV);
        }
        missing
    }
}

/// Extraction mode used by AgentQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Fast,
    Standard,
}

impl std::str::FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast" => Ok(Mode::Fast),
            "standard" => Ok(Mode::Standard),
            _ => Err(ConfigError::InvalidValue {
                name: "mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Settings for the AgentQL REST client.
#[derive(Clone)]
pub struct AgentQlConfig {
    pub api_key: String,
    pub api_base: String,
    pub timeout: Duration,
    pub mode: Mode,
    /// Seconds to wait for the page to load before extracting.
    pub wait_for: u64,
    pub scroll_to_bottom: bool,
    pub screenshot: bool,
    pub stealth_mode: bool,
    /// Sent as `X-TF-Request-Origin`.
    pub request_origin: String,
}

impl std::fmt::Debug for AgentQlConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentQlConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .field("mode", &self.mode)
            .field("wait_for", &self.wait_for)
            .field("scroll_to_bottom", &self.scroll_to_bottom)
            .field("screenshot", &self.screenshot)
            .field("stealth_mode", &self.stealth_mode)
            .field("request_origin", &self.request_origin)
            .finish()
    }
}

impl AgentQlConfig {
    /// Create a config with default settings for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_AGENTQL_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            mode: Mode::default(),
            wait_for: 0,
            scroll_to_bottom: false,
            screenshot: false,
            stealth_mode: false,
            request_origin: DEFAULT_REQUEST_ORIGIN.to_string(),
        }
    }

    /// Load from `AGENTQL_API_KEY`, honouring `AGENTQL_API_BASE` if set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            env_var(AGENTQL_API_KEY_ENV).ok_or(ConfigError::MissingEnv(AGENTQL_API_KEY_ENV))?;
        let mut config = Self::new(api_key);
        if let Some(base) = env_var(AGENTQL_API_BASE_ENV) {
            config = config.api_base(base);
        }
        Ok(config)
    }

    /// Set the API base URL (without the `/v1/...` path).
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the extraction mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the page-load wait in seconds, clamped to [`MAX_WAIT_FOR_SECS`].
    pub fn wait_for(mut self, secs: u64) -> Self {
        self.wait_for = secs.min(MAX_WAIT_FOR_SECS);
        self
    }

    /// Scroll to the bottom of the page before extracting.
    pub fn scroll_to_bottom(mut self, enabled: bool) -> Self {
        self.scroll_to_bottom = enabled;
        self
    }

    /// Capture a screenshot alongside the data.
    pub fn screenshot(mut self, enabled: bool) -> Self {
        self.screenshot = enabled;
        self
    }

    /// Enable experimental stealth mode.
    pub fn stealth_mode(mut self, enabled: bool) -> Self {
        self.stealth_mode = enabled;
        self
    }

    /// Set the request origin header value.
    pub fn request_origin(mut self, origin: impl Into<String>) -> Self {
        self.request_origin = origin.into();
        self
    }

    /// Full URL of the query-data endpoint.
    pub fn query_data_url(&self) -> String {
        format!("{}/v1/query-data", self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgentQlConfig::new("key");
        assert_eq!(config.api_base, DEFAULT_AGENTQL_API_BASE);
        assert_eq!(config.timeout, Duration::from_secs(900));
        assert_eq!(config.mode, Mode::Fast);
        assert_eq!(config.wait_for, 0);
        assert!(!config.stealth_mode);
    }

    #[test]
    fn test_wait_for_is_clamped() {
        let config = AgentQlConfig::new("key").wait_for(30);
        assert_eq!(config.wait_for, MAX_WAIT_FOR_SECS);
    }

    #[test]
    fn test_query_data_url_strips_trailing_slash() {
        let config = AgentQlConfig::new("key").api_base("http://localhost:8080/");
        assert_eq!(config.query_data_url(), "http://localhost:8080/v1/query-data");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("standard".parse::<Mode>().unwrap(), Mode::Standard);
        assert_eq!("FAST".parse::<Mode>().unwrap(), Mode::Fast);
        assert!("turbo".parse::<Mode>().is_err());
    }

    #[test]
    fn test_live_requires_both_keys() {
        let creds = Credentials {
            openai_api_key: Some("sk".into()),
            agentql_api_key: None,
        };
        assert!(creds.live().is_none());
        assert_eq!(creds.missing(), vec![AGENTQL_API_KEY_ENV]);

        let creds = Credentials {
            openai_api_key: Some("sk".into()),
            agentql_api_key: Some("aq".into()),
        };
        assert!(creds.live().is_some());
        assert!(creds.missing().is_empty());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let creds = Credentials {
            openai_api_key: Some("sk-secret".into()),
            agentql_api_key: Some("aq-secret".into()),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret"));

        let printed = format!("{:?}", AgentQlConfig::new("aq-secret"));
        assert!(!printed.contains("secret"));
    }
}
