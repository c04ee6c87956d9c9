//! HTTP transport used by the client.
//!
//! The client serializes request envelopes itself and only needs a way to
//! POST a JSON body and read the response back. [`HttpTransport`] does that
//! with `reqwest`; tests and embedders can plug in their own [`Transport`].

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Proxy};
use url::Url;

use crate::config::DEFAULT_USER_AGENT;
use crate::error::Result;

const MEDIA_TYPE: &str = "application/json";

/// Sends one JSON request body and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: Url, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// Options for the default HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: String,
    pub proxy: Option<String>,
    pub local_address: Option<IpAddr>,
    pub timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
            local_address: None,
            timeout: None,
        }
    }
}

/// `reqwest`-backed transport. Cheap to clone; clones share a connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(options: HttpOptions) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(addr) = options.local_address {
            builder = builder.local_address(addr);
        }

        if let Some(proxy_url) = &options.proxy {
            builder = builder.proxy(Proxy::all(proxy_url)?);
        }

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            user_agent: options.user_agent,
        })
    }

    /// Wrap an existing `reqwest` client.
    pub fn from_client(client: Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: Url, body: Vec<u8>) -> Result<Vec<u8>> {
        let response = self
            .client
            .post(url.as_str())
            .header(ACCEPT, MEDIA_TYPE)
            .header(CONTENT_TYPE, MEDIA_TYPE)
            .header(USER_AGENT, self.user_agent.as_str())
            .body(body)
            .send()
            .await?;

        tracing::trace!(status = %response.status(), %url, "Response received");

        Ok(response.bytes().await?.to_vec())
    }
}
