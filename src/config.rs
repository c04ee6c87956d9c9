//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{AntiGateError, Result};

/// Service endpoint used unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://api.anti-captcha.com/";
/// API version assumed when none is configured.
pub const DEFAULT_API_VERSION: &str = "v2";
/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("antigate-rs/", env!("CARGO_PKG_VERSION"));

/// Environment variables read by [`ClientConfig::from_env`].
pub const ENV_CLIENT_KEY: &str = "ANTIGATE_CLIENT_KEY";
pub const ENV_API_VERSION: &str = "ANTIGATE_API_VERSION";
pub const ENV_BASE_URL: &str = "ANTIGATE_BASE_URL";

/// Operation paths, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub create_task: String,
    pub task_result: String,
    pub balance: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            create_task: "createTask".to_string(),
            task_result: "getTaskResult".to_string(),
            balance: "getBalance".to_string(),
        }
    }
}

/// Wait schedule between polls of a submitted task.
///
/// Waits `countdown`, `countdown - 1`, ..., `1` units, polling after each
/// wait. The defaults give 20s, 19s, ..., 1s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub countdown: u32,
    pub unit: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            countdown: 20,
            unit: Duration::from_secs(1),
        }
    }
}

impl PollSchedule {
    pub fn new(countdown: u32, unit: Duration) -> Self {
        Self { countdown, unit }
    }

    /// Waits before each poll, longest first.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        let unit = self.unit;
        (1..=self.countdown).rev().map(move |step| unit * step)
    }
}

/// Everything a client needs to talk to the service.
#[derive(Clone)]
pub struct ClientConfig {
    pub client_key: String,
    pub api_version: String,
    pub base_url: Url,
    pub user_agent: String,
    /// Developer id credited for submitted tasks
    pub soft_id: Option<u64>,
    /// Worker pool, e.g. `en` or `rn`
    pub language_pool: Option<String>,
    /// URL the service calls when a task completes
    pub callback_url: Option<String>,
    pub poll: PollSchedule,
    pub endpoints: Endpoints,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("soft_id", &self.soft_id)
            .field("language_pool", &self.language_pool)
            .field("callback_url", &self.callback_url)
            .field("poll", &self.poll)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(client_key: impl Into<String>) -> Self {
        Self {
            client_key: client_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: default_base_url(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            soft_id: None,
            language_pool: None,
            callback_url: None,
            poll: PollSchedule::default(),
            endpoints: Endpoints::default(),
        }
    }

    /// Load from `ANTIGATE_CLIENT_KEY`, `ANTIGATE_API_VERSION` and
    /// `ANTIGATE_BASE_URL`. Only the key is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let client_key = lookup(ENV_CLIENT_KEY)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AntiGateError::Config(format!("{} is not set", ENV_CLIENT_KEY)))?;

        let mut config = Self::new(client_key);
        if let Some(version) = lookup(ENV_API_VERSION) {
            config = config.api_version(version);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.base_url(&base_url)?;
        }
        Ok(config)
    }

    /// Empty values fall back to [`DEFAULT_API_VERSION`].
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.api_version = if version.is_empty() {
            DEFAULT_API_VERSION.to_string()
        } else {
            version
        };
        self
    }

    /// Point the client at another host, e.g. a local mock.
    pub fn base_url(mut self, base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(AntiGateError::Config(format!(
                "Base URL cannot be joined with paths: {}",
                base_url
            )));
        }
        // Url::join replaces the last segment unless the path ends in '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn soft_id(mut self, soft_id: u64) -> Self {
        self.soft_id = Some(soft_id);
        self
    }

    pub fn language_pool(mut self, pool: impl Into<String>) -> Self {
        self.language_pool = Some(pool.into());
        self
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn poll(mut self, poll: PollSchedule) -> Self {
        self.poll = poll;
        self
    }

    /// Use other operation paths, e.g. behind a proxying gateway.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}
