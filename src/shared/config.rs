//! Application configuration. NEIS credentials, school identifiers, server bind.

use std::time::Duration;

use serde::Deserialize;

/// Default NEIS open API base.
pub const DEFAULT_BASE_URL: &str = "https://open.neis.go.kr/hub";

/// Default outbound fetch timeout in seconds. The chat platform expects a
/// skill answer within a few seconds, so the upstream deadline stays short.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 3;

/// Default webhook bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// NEIS open API key. Read from NEIS_BOT_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Education office code (e.g. "P10"). Read from NEIS_BOT_OFFICE_CODE.
    #[serde(default)]
    pub office_code: Option<String>,

    /// School code (e.g. "8321081"). Read from NEIS_BOT_SCHOOL_CODE.
    #[serde(default)]
    pub school_code: Option<String>,

    /// NEIS base URL override (staging/tests). Read from NEIS_BOT_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Outbound fetch timeout in seconds. Read from NEIS_BOT_FETCH_TIMEOUT_SECS.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,

    /// Webhook bind address. Read from NEIS_BOT_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NEIS_BOT"));
        if let Ok(path) = std::env::var("NEIS_BOT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the NEIS API key if configured. Reads from config or NEIS_BOT_API_KEY env.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("NEIS_BOT_API_KEY").ok())
    }

    /// Returns the education office code from config or NEIS_BOT_OFFICE_CODE env.
    pub fn office_code(&self) -> Option<String> {
        self.office_code
            .clone()
            .or_else(|| std::env::var("NEIS_BOT_OFFICE_CODE").ok())
    }

    /// Returns the school code from config or NEIS_BOT_SCHOOL_CODE env.
    pub fn school_code(&self) -> Option<String> {
        self.school_code
            .clone()
            .or_else(|| std::env::var("NEIS_BOT_SCHOOL_CODE").ok())
    }

    /// Returns the NEIS base URL. Defaults to the public open API host.
    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .or_else(|| std::env::var("NEIS_BOT_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Returns the outbound fetch timeout. Defaults to 3 seconds if unset.
    pub fn fetch_timeout_or_default(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS))
    }

    /// Returns the webhook bind address. Defaults to 0.0.0.0:5000.
    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Returns true if the real NEIS gateway can be used (key and school
    /// identifiers all present).
    pub fn is_neis_configured(&self) -> bool {
        self.api_key().is_some() && self.office_code().is_some() && self.school_code().is_some()
    }
}
